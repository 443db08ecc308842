use thiserror::Error;

/// Failure taxonomy for the two-step verification workflow.
///
/// `Display` carries the user-facing message; the HTTP layer returns it
/// verbatim in the response envelope. Which variant occurred decides the
/// status code, so callers can tell a wrong code from a down provider.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Malformed input caught before any provider call.
    #[error("{0}")]
    InvalidInput(String),

    /// The provider declined to start a verification (bad number, rate limit).
    #[error("{0}")]
    ProviderRejected(String),

    /// The provider checked the code and did not approve it.
    #[error("{0}")]
    CodeMismatch(String),

    /// The provider could not be reached or answered unusably.
    #[error("{0}")]
    ProviderUnavailable(String),

    /// The provider approved but the account write failed. No account exists;
    /// the caller may retry the whole flow.
    #[error("{0}")]
    PersistenceFailure(String),
}
