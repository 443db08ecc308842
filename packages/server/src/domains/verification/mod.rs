//! Verification domain - phone verification gating account creation
//!
//! Two-step flow against an SMS provider (Twilio Verify):
//!   request_code → provider texts a one-time code to the phone
//!   confirm_registration → provider checks the code; approval is the only
//!   path to an account row
//!
//! The service holds no state between the steps. The provider tracks the
//! pending verification; the client holds the profile fields.

pub mod actions;
pub mod errors;
pub mod models;
pub mod types;

pub use errors::VerificationError;
pub use types::{CodeRequested, PendingRegistration};
