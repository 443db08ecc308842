//! Phone verification endpoints
//!
//! POST /send-verification and POST /verify-code. Both answer the
//! `{success, message}` envelope with 200, 400 or 500; clients branch on
//! `success` and show `message` as-is.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Deserialize;

use crate::domains::verification::actions::{confirm_registration, request_code};
use crate::domains::verification::{PendingRegistration, VerificationError};
use crate::server::app::AppState;
use crate::server::routes::StatusResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    pub phone_number: String,
    pub code: String,
    pub name: String,
    /// Caller-chosen stable id, echoed into the created account.
    pub id: String,
    pub password: String,
}

/// Start a verification: the provider texts a code to the given number.
pub async fn send_verification_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SendVerificationRequest>,
) -> (StatusCode, Json<StatusResponse>) {
    match request_code(&request.phone_number, &state.deps).await {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusResponse {
                success: true,
                message: "Verification code sent.".to_string(),
            }),
        ),
        Err(err) => error_response(err),
    }
}

/// Check a code and, on approval, create the user account.
pub async fn verify_code_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<VerifyCodeRequest>,
) -> (StatusCode, Json<StatusResponse>) {
    let registration = PendingRegistration {
        name: request.name,
        phone_number: request.phone_number.clone(),
        password: request.password,
        user_id: request.id,
    };

    match confirm_registration(&request.phone_number, &request.code, registration, &state.deps)
        .await
    {
        Ok(_account) => (
            StatusCode::OK,
            Json(StatusResponse {
                success: true,
                message: "Phone number verified and user created.".to_string(),
            }),
        ),
        Err(err) => error_response(err),
    }
}

/// Map a workflow error onto the envelope.
///
/// Caller mistakes (bad input, wrong code) are 400; everything on the
/// server's side of the fence (provider down, store write failed) is 500.
fn error_response(err: VerificationError) -> (StatusCode, Json<StatusResponse>) {
    let status = match &err {
        VerificationError::InvalidInput(_) | VerificationError::CodeMismatch(_) => {
            StatusCode::BAD_REQUEST
        }
        VerificationError::ProviderRejected(_)
        | VerificationError::ProviderUnavailable(_)
        | VerificationError::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(StatusResponse {
            success: false,
            message: err.to_string(),
        }),
    )
}
