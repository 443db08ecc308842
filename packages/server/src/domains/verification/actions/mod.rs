//! Verification domain actions - business logic functions

mod confirm_registration;
mod request_code;

pub use confirm_registration::confirm_registration;
pub use request_code::request_code;
