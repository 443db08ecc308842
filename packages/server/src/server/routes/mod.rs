//! HTTP route handlers

use serde::{Deserialize, Serialize};

pub mod alerts;
pub mod health;
pub mod verification;

pub use alerts::{create_alert_handler, nearby_alerts_handler};
pub use health::health_handler;
pub use verification::{send_verification_handler, verify_code_handler};

/// Envelope every mutation-style endpoint answers with.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}
