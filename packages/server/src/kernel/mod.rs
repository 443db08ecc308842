//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PgAlertStore, PgUserStore, ServerDeps, TwilioVerifyAdapter};
pub use test_dependencies::{MockAlertStore, MockUserStore, MockVerifyService, TestDependencies};
pub use traits::*;
