//! Simple types carried through the verification workflow

use serde::{Deserialize, Serialize};

/// Profile fields a caller submits alongside the code. Held by the client
/// between the two steps; the server stores nothing until approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub name: String,
    pub phone_number: String,
    pub password: String,
    pub user_id: String,
}

/// Outcome of a successful code request. The code itself never passes
/// through this service; it travels from the provider to the phone.
#[derive(Debug, Clone)]
pub struct CodeRequested {
    /// Provider-side id of the pending verification.
    pub sid: String,
}
