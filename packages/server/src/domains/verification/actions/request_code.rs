//! Request verification code action

use tracing::{error, info};

use crate::domains::verification::errors::VerificationError;
use crate::domains::verification::types::CodeRequested;
use crate::kernel::{ProviderError, ServerDeps};

/// Ask the SMS provider to create and deliver a one-time code.
///
/// The code travels from the provider to the phone; this service never sees
/// it and stores nothing. Repeat calls for the same number are forwarded to
/// the provider as-is.
pub async fn request_code(
    phone_number: &str,
    deps: &ServerDeps,
) -> Result<CodeRequested, VerificationError> {
    if phone_number.trim().is_empty() {
        return Err(VerificationError::InvalidInput(
            "Phone number is required.".to_string(),
        ));
    }

    match deps.verify_service.start_verification(phone_number).await {
        Ok(sid) => {
            info!("Verification code requested for {} ({})", phone_number, sid);
            Ok(CodeRequested { sid })
        }
        Err(ProviderError::Rejected { status, message }) => {
            error!(
                "Provider rejected verification for {} (HTTP {}): {}",
                phone_number, status, message
            );
            Err(VerificationError::ProviderRejected(message))
        }
        Err(ProviderError::Unavailable(message)) => {
            error!("Provider unreachable for {}: {}", phone_number, message);
            Err(VerificationError::ProviderUnavailable(message))
        }
    }
}
