//! Server dependencies - the injectable seams behind domain actions
//!
//! Production wires these to Twilio and Postgres in `main`; tests substitute
//! the doubles in `test_dependencies`.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use twilio::{TwilioError, TwilioService};

use crate::domains::alerts::models::{NewSosAlert, SosAlert};
use crate::domains::verification::models::{NewUserAccount, UserAccount};
use crate::kernel::traits::{BaseAlertStore, BaseUserStore, BaseVerifyService, ProviderError};

/// Wrapper around TwilioService implementing the verify-provider seam.
pub struct TwilioVerifyAdapter(pub Arc<TwilioService>);

impl TwilioVerifyAdapter {
    pub fn new(service: Arc<TwilioService>) -> Self {
        Self(service)
    }
}

impl From<TwilioError> for ProviderError {
    fn from(err: TwilioError) -> Self {
        match err {
            TwilioError::Rejected { status, message } => {
                ProviderError::Rejected { status, message }
            }
            TwilioError::Transport(e) => ProviderError::Unavailable(e.to_string()),
            TwilioError::UnexpectedResponse(message) => ProviderError::Unavailable(message),
        }
    }
}

#[async_trait]
impl BaseVerifyService for TwilioVerifyAdapter {
    async fn start_verification(&self, phone_number: &str) -> Result<String, ProviderError> {
        let verification = self.0.start_verification(phone_number).await?;
        Ok(verification.sid)
    }

    async fn check_verification(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<String, ProviderError> {
        let check = self.0.check_verification(phone_number, code).await?;
        Ok(check.status)
    }
}

/// Postgres-backed user account store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseUserStore for PgUserStore {
    async fn append_account(&self, account: NewUserAccount) -> Result<UserAccount> {
        UserAccount::append(&account, &self.pool).await
    }
}

/// Postgres-backed alert store.
pub struct PgAlertStore {
    pool: PgPool,
}

impl PgAlertStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseAlertStore for PgAlertStore {
    async fn insert_alert(&self, alert: NewSosAlert) -> Result<SosAlert> {
        SosAlert::insert(&alert, &self.pool).await
    }

    async fn list_all(&self) -> Result<Vec<SosAlert>> {
        SosAlert::list_all(&self.pool).await
    }
}

/// Dependencies handed to domain actions and route handlers.
///
/// Built once at startup, shared behind an Arc. Holding trait objects rather
/// than concrete clients keeps actions testable without network or database.
#[derive(Clone)]
pub struct ServerDeps {
    pub verify_service: Arc<dyn BaseVerifyService>,
    pub user_store: Arc<dyn BaseUserStore>,
    pub alert_store: Arc<dyn BaseAlertStore>,
}

impl ServerDeps {
    pub fn new(
        verify_service: Arc<dyn BaseVerifyService>,
        user_store: Arc<dyn BaseUserStore>,
        alert_store: Arc<dyn BaseAlertStore>,
    ) -> Self {
        Self {
            verify_service,
            user_store,
            alert_store,
        }
    }
}
