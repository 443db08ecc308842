//! Alerts domain actions - business logic functions

mod nearby;

pub use nearby::{nearby_alerts, DEFAULT_RADIUS_METERS};
