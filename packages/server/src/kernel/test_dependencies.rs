// TestDependencies - mock implementations for testing
//
// Provides mock seams that can be injected into ServerDeps for tests.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{
    BaseAlertStore, BaseUserStore, BaseVerifyService, ProviderError, ServerDeps,
};
use crate::domains::alerts::models::{NewSosAlert, SosAlert};
use crate::domains::verification::models::{NewUserAccount, UserAccount};

// =============================================================================
// Mock Verify Service
// =============================================================================

/// Scripted stand-in for the SMS provider.
///
/// Queued results are consumed in order; once the queue is empty, starts
/// answer with a fresh sid and checks answer "approved".
pub struct MockVerifyService {
    start_results: Arc<Mutex<Vec<Result<String, ProviderError>>>>,
    check_results: Arc<Mutex<Vec<Result<String, ProviderError>>>>,
    start_calls: Arc<Mutex<Vec<String>>>,
    check_calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockVerifyService {
    pub fn new() -> Self {
        Self {
            start_results: Arc::new(Mutex::new(Vec::new())),
            check_results: Arc::new(Mutex::new(Vec::new())),
            start_calls: Arc::new(Mutex::new(Vec::new())),
            check_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a sid for the next start call
    pub fn with_start_sid(self, sid: &str) -> Self {
        self.start_results
            .lock()
            .unwrap()
            .push(Ok(sid.to_string()));
        self
    }

    /// Queue an error for the next start call
    pub fn with_start_error(self, err: ProviderError) -> Self {
        self.start_results.lock().unwrap().push(Err(err));
        self
    }

    /// Queue a status for the next check call ("approved", "pending", ...)
    pub fn with_check_status(self, status: &str) -> Self {
        self.check_results
            .lock()
            .unwrap()
            .push(Ok(status.to_string()));
        self
    }

    /// Queue an error for the next check call
    pub fn with_check_error(self, err: ProviderError) -> Self {
        self.check_results.lock().unwrap().push(Err(err));
        self
    }

    /// Phone numbers passed to start calls, in order
    pub fn start_calls(&self) -> Vec<String> {
        self.start_calls.lock().unwrap().clone()
    }

    /// (phone number, code) pairs passed to check calls, in order
    pub fn check_calls(&self) -> Vec<(String, String)> {
        self.check_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseVerifyService for MockVerifyService {
    async fn start_verification(&self, phone_number: &str) -> Result<String, ProviderError> {
        self.start_calls
            .lock()
            .unwrap()
            .push(phone_number.to_string());

        let mut results = self.start_results.lock().unwrap();
        if results.is_empty() {
            Ok(format!("VE_mock_{}", Uuid::new_v4().simple()))
        } else {
            results.remove(0)
        }
    }

    async fn check_verification(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<String, ProviderError> {
        self.check_calls
            .lock()
            .unwrap()
            .push((phone_number.to_string(), code.to_string()));

        let mut results = self.check_results.lock().unwrap();
        if results.is_empty() {
            Ok("approved".to_string())
        } else {
            results.remove(0)
        }
    }
}

impl Default for MockVerifyService {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Mock User Store
// =============================================================================

/// In-memory user store that records every append attempt.
pub struct MockUserStore {
    fail_with: Arc<Mutex<Option<String>>>,
    append_calls: Arc<Mutex<Vec<NewUserAccount>>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self {
            fail_with: Arc::new(Mutex::new(None)),
            append_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every append fail with the given message
    pub fn failing(message: &str) -> Self {
        let store = Self::new();
        *store.fail_with.lock().unwrap() = Some(message.to_string());
        store
    }

    /// Accounts passed to append calls, in order (including failed attempts)
    pub fn append_calls(&self) -> Vec<NewUserAccount> {
        self.append_calls.lock().unwrap().clone()
    }

    pub fn append_count(&self) -> usize {
        self.append_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseUserStore for MockUserStore {
    async fn append_account(&self, account: NewUserAccount) -> Result<UserAccount> {
        self.append_calls.lock().unwrap().push(account.clone());

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            anyhow::bail!(message);
        }

        Ok(UserAccount {
            id: Uuid::new_v4(),
            user_id: account.user_id,
            name: account.name,
            phone_number: account.phone_number,
            password_hash: account.password_hash,
            created_at: Utc::now(),
        })
    }
}

impl Default for MockUserStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Mock Alert Store
// =============================================================================

/// In-memory alert store, optionally pre-seeded.
pub struct MockAlertStore {
    fail_with: Arc<Mutex<Option<String>>>,
    alerts: Arc<Mutex<Vec<SosAlert>>>,
}

impl MockAlertStore {
    pub fn new() -> Self {
        Self {
            fail_with: Arc::new(Mutex::new(None)),
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every store call fail with the given message
    pub fn failing(message: &str) -> Self {
        let store = Self::new();
        *store.fail_with.lock().unwrap() = Some(message.to_string());
        store
    }

    /// Seed an alert into the store
    pub fn with_alert(self, alert: SosAlert) -> Self {
        self.alerts.lock().unwrap().push(alert);
        self
    }

    /// Everything currently stored, in insertion order
    pub fn alerts(&self) -> Vec<SosAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAlertStore for MockAlertStore {
    async fn insert_alert(&self, alert: NewSosAlert) -> Result<SosAlert> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            anyhow::bail!(message);
        }

        let stored = SosAlert {
            id: Uuid::new_v4(),
            author_id: alert.author_id,
            message: alert.message,
            media_url: alert.media_url,
            latitude: alert.location.latitude,
            longitude: alert.location.longitude,
            created_at: Utc::now(),
        };
        self.alerts.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<SosAlert>> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            anyhow::bail!(message);
        }
        Ok(self.alerts.lock().unwrap().clone())
    }
}

impl Default for MockAlertStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub verify_service: Arc<MockVerifyService>,
    pub user_store: Arc<MockUserStore>,
    pub alert_store: Arc<MockAlertStore>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            verify_service: Arc::new(MockVerifyService::new()),
            user_store: Arc::new(MockUserStore::new()),
            alert_store: Arc::new(MockAlertStore::new()),
        }
    }

    /// Set a mock verify service
    pub fn mock_verify(mut self, service: MockVerifyService) -> Self {
        self.verify_service = Arc::new(service);
        self
    }

    /// Set a mock user store
    pub fn mock_user_store(mut self, store: MockUserStore) -> Self {
        self.user_store = Arc::new(store);
        self
    }

    /// Set a mock alert store
    pub fn mock_alert_store(mut self, store: MockAlertStore) -> Self {
        self.alert_store = Arc::new(store);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_deps(self) -> ServerDeps {
        ServerDeps::new(self.verify_service, self.user_store, self.alert_store)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
