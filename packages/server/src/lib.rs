// SOS Alert API - Core
//
// Backend for a neighborhood SOS app: phone-verified registration and
// location-tagged alert broadcasts with a proximity-filtered feed.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
