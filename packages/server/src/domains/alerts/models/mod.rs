pub mod alert;

pub use alert::{NewSosAlert, SosAlert};
