//! Confirm verification and register action

use tracing::{error, info};

use crate::domains::verification::errors::VerificationError;
use crate::domains::verification::models::{hash_password, NewUserAccount, UserAccount};
use crate::domains::verification::types::PendingRegistration;
use crate::kernel::{ProviderError, ServerDeps};

/// Status string the provider uses for a passed check.
const STATUS_APPROVED: &str = "approved";

/// Check a submitted code with the provider and, only on approval, append the
/// pending registration to the user store.
///
/// The ordering is the whole point: no store write happens on any failure
/// path, so an account row always means its phone number passed a check.
/// A failed write after approval leaves no account; the caller may retry
/// the flow from the start.
pub async fn confirm_registration(
    phone_number: &str,
    code: &str,
    registration: PendingRegistration,
    deps: &ServerDeps,
) -> Result<UserAccount, VerificationError> {
    if phone_number.trim().is_empty() || code.trim().is_empty() {
        return Err(VerificationError::InvalidInput(
            "Phone number and code are required.".to_string(),
        ));
    }

    let status = match deps
        .verify_service
        .check_verification(phone_number, code)
        .await
    {
        Ok(status) => status,
        // A 4xx answer on check means the verification is unknown to the
        // provider (expired, never started, or already consumed). To the
        // caller that is indistinguishable from a wrong code.
        Err(ProviderError::Rejected { status, message }) if (400..500).contains(&status) => {
            info!(
                "Check rejected for {} (HTTP {}): {}",
                phone_number, status, message
            );
            return Err(VerificationError::CodeMismatch(
                "Verification failed.".to_string(),
            ));
        }
        Err(err) => {
            error!("Provider check failed for {}: {}", phone_number, err);
            return Err(VerificationError::ProviderUnavailable(err.to_string()));
        }
    };

    if status != STATUS_APPROVED {
        info!(
            "Verification not approved for {} (status: {})",
            phone_number, status
        );
        return Err(VerificationError::CodeMismatch(
            "Verification failed.".to_string(),
        ));
    }

    let account = NewUserAccount {
        user_id: registration.user_id,
        name: registration.name,
        phone_number: registration.phone_number,
        password_hash: hash_password(&registration.password),
    };

    match deps.user_store.append_account(account).await {
        Ok(created) => {
            info!(
                "Phone number verified and user {} created",
                created.user_id
            );
            Ok(created)
        }
        Err(err) => {
            error!("Account write failed after approval: {:#}", err);
            Err(VerificationError::PersistenceFailure(format!(
                "Failed to create user: {err:#}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{MockUserStore, MockVerifyService, TestDependencies};

    fn registration() -> PendingRegistration {
        PendingRegistration {
            name: "Ada".to_string(),
            phone_number: "+15555550100".to_string(),
            password: "hunter2".to_string(),
            user_id: "user-ada".to_string(),
        }
    }

    #[tokio::test]
    async fn approval_creates_the_account_with_registration_fields() {
        let test_deps = TestDependencies::new()
            .mock_verify(MockVerifyService::new().with_check_status("approved"));
        let deps = test_deps.clone().into_deps();

        let account = confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap();

        assert_eq!(account.user_id, "user-ada");
        assert_eq!(account.name, "Ada");
        assert_eq!(account.phone_number, "+15555550100");
        assert_eq!(account.password_hash, hash_password("hunter2"));
        assert_eq!(
            test_deps.verify_service.check_calls(),
            vec![("+15555550100".to_string(), "123456".to_string())]
        );
        assert_eq!(test_deps.user_store.append_count(), 1);
    }

    #[tokio::test]
    async fn raw_password_never_reaches_the_store() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.clone().into_deps();

        confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap();

        let appended = test_deps.user_store.append_calls();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].password_hash, hash_password("hunter2"));
        assert_ne!(appended[0].password_hash, "hunter2");
    }

    #[tokio::test]
    async fn pending_status_means_code_mismatch_and_no_write() {
        let test_deps = TestDependencies::new()
            .mock_verify(MockVerifyService::new().with_check_status("pending"));
        let deps = test_deps.clone().into_deps();

        let err = confirm_registration("+15555550100", "000000", registration(), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, VerificationError::CodeMismatch(_)));
        assert_eq!(err.to_string(), "Verification failed.");
        assert_eq!(test_deps.user_store.append_count(), 0);
    }

    #[tokio::test]
    async fn expired_verification_reads_as_code_mismatch() {
        // Twilio answers 404 when the verification is expired or was never
        // started; the caller just sees a failed verification.
        let test_deps = TestDependencies::new().mock_verify(
            MockVerifyService::new().with_check_error(ProviderError::Rejected {
                status: 404,
                message: "The requested resource was not found".to_string(),
            }),
        );
        let deps = test_deps.clone().into_deps();

        let err = confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, VerificationError::CodeMismatch(_)));
        assert_eq!(test_deps.user_store.append_count(), 0);
    }

    #[tokio::test]
    async fn provider_outage_during_check_writes_nothing() {
        let test_deps = TestDependencies::new().mock_verify(
            MockVerifyService::new()
                .with_check_error(ProviderError::Unavailable("timed out".to_string())),
        );
        let deps = test_deps.clone().into_deps();

        let err = confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, VerificationError::ProviderUnavailable(_)));
        assert_eq!(test_deps.user_store.append_count(), 0);
    }

    #[tokio::test]
    async fn provider_5xx_during_check_is_unavailability_not_mismatch() {
        let test_deps = TestDependencies::new().mock_verify(
            MockVerifyService::new().with_check_error(ProviderError::Rejected {
                status: 503,
                message: "Service unavailable".to_string(),
            }),
        );
        let deps = test_deps.clone().into_deps();

        let err = confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, VerificationError::ProviderUnavailable(_)));
        assert_eq!(test_deps.user_store.append_count(), 0);
    }

    #[tokio::test]
    async fn store_failure_after_approval_is_persistence_failure() {
        let test_deps = TestDependencies::new()
            .mock_user_store(MockUserStore::failing("connection reset"));
        let deps = test_deps.clone().into_deps();

        let err = confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, VerificationError::PersistenceFailure(_)));
        // The write was attempted once, after approval, and failed.
        assert_eq!(test_deps.user_store.append_count(), 1);
    }

    #[tokio::test]
    async fn blank_inputs_never_touch_provider_or_store() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.clone().into_deps();

        let err = confirm_registration("", "123456", registration(), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, VerificationError::InvalidInput(_)));

        let err = confirm_registration("+15555550100", "  ", registration(), &deps)
            .await
            .unwrap_err();
        assert!(matches!(err, VerificationError::InvalidInput(_)));

        assert!(test_deps.verify_service.check_calls().is_empty());
        assert_eq!(test_deps.user_store.append_count(), 0);
    }

    #[tokio::test]
    async fn repeat_confirmations_append_separate_rows() {
        // No idempotency key: verifying the same number twice is two rows.
        let test_deps = TestDependencies::new();
        let deps = test_deps.clone().into_deps();

        let first = confirm_registration("+15555550100", "123456", registration(), &deps)
            .await
            .unwrap();
        let second = confirm_registration("+15555550100", "654321", registration(), &deps)
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(test_deps.user_store.append_count(), 2);
    }
}
