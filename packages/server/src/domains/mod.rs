// Domain modules - organized by feature

pub mod alerts;
pub mod verification;
