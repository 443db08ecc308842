//! Shared fixtures for integration tests.
#![allow(dead_code)]

use anyhow::Result;
use server_core::common::utils::geo::GeoPoint;
use server_core::domains::alerts::models::{NewSosAlert, SosAlert};
use sqlx::PgPool;
use uuid::Uuid;

/// Insert an alert at the given position.
pub async fn seed_alert(
    pool: &PgPool,
    author_id: &str,
    latitude: f64,
    longitude: f64,
) -> Result<SosAlert> {
    SosAlert::insert(
        &NewSosAlert {
            author_id: author_id.to_string(),
            message: "Need help".to_string(),
            media_url: None,
            location: GeoPoint {
                latitude,
                longitude,
            },
        },
        pool,
    )
    .await
}

/// A phone number no other test will have used. The schema stores phone
/// numbers as opaque text, so uniqueness is all that matters here.
pub fn unique_phone() -> String {
    format!("+1555{}", &Uuid::new_v4().simple().to_string()[..10])
}

/// A user id no other test will have used.
pub fn unique_user_id() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}
