//! Response shapes for the Twilio Verify v2 API.
//!
//! Only the fields the service inspects are deserialized; Twilio sends many
//! more and serde ignores them.

use serde::Deserialize;

/// Resource returned by `POST /v2/Services/{sid}/Verifications`.
///
/// A freshly created verification always has status `"pending"`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationResource {
    pub sid: String,
    pub to: String,
    pub channel: String,
    pub status: String,
}

/// Resource returned by `POST /v2/Services/{sid}/VerificationCheck`.
///
/// Twilio answers 200 for a wrong-but-well-formed code; the outcome is in
/// `status` (`"approved"` or `"pending"`), not the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationCheckResource {
    pub sid: String,
    pub to: String,
    pub status: String,
    #[serde(default)]
    pub valid: bool,
}

/// Error document Twilio returns with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}
