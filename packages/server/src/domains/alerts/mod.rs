//! Alerts domain - SOS broadcasts and the proximity feed
//!
//! An alert is an append-only record of someone asking for help at a
//! location. The feed shows a viewer every other author's alert within a
//! radius of their position; filtering happens in process over the full set.

pub mod actions;
pub mod models;

pub use models::{NewSosAlert, SosAlert};
