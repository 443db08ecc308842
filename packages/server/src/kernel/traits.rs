// Trait definitions for dependency injection
//
// Infrastructure seams only - business rules live in domain actions.
// Naming convention: Base* for trait names.

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domains::alerts::models::{NewSosAlert, SosAlert};
use crate::domains::verification::models::{NewUserAccount, UserAccount};

/// Failure reported by the SMS verification provider seam.
///
/// The distinction matters to callers: a rejection is the provider saying no
/// to this request, unavailability is the provider not answering at all.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with an error status; `message` is its own text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider could not be reached or its answer was unusable.
    #[error("{0}")]
    Unavailable(String),
}

/// SMS code verification provider.
#[async_trait]
pub trait BaseVerifyService: Send + Sync {
    /// Ask the provider to create and deliver a one-time code over SMS.
    /// Returns the provider-side id of the pending verification.
    async fn start_verification(&self, phone_number: &str) -> Result<String, ProviderError>;

    /// Submit a code for checking. Returns the provider's status string;
    /// anything other than "approved" means the code did not pass.
    async fn check_verification(&self, phone_number: &str, code: &str)
        -> Result<String, ProviderError>;
}

/// Append-only store of verified user accounts.
#[async_trait]
pub trait BaseUserStore: Send + Sync {
    async fn append_account(&self, account: NewUserAccount) -> Result<UserAccount>;
}

/// Store of broadcast SOS alerts.
#[async_trait]
pub trait BaseAlertStore: Send + Sync {
    async fn insert_alert(&self, alert: NewSosAlert) -> Result<SosAlert>;
    async fn list_all(&self) -> Result<Vec<SosAlert>>;
}
