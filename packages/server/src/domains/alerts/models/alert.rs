use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::utils::geo::GeoPoint;

/// SOS alert model - SQL persistence layer
///
/// Append-only: alerts are broadcast once and never edited. The feed filters
/// these rows by distance; it never rewrites them.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct SosAlert {
    pub id: Uuid,
    pub author_id: String,
    pub message: String,
    pub media_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the author when broadcasting an alert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSosAlert {
    pub author_id: String,
    pub message: String,
    pub media_url: Option<String>,
    pub location: GeoPoint,
}

impl SosAlert {
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Insert a new alert, returning the stored row with its id and timestamp.
    pub async fn insert(new_alert: &NewSosAlert, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO sos_alerts (author_id, message, media_url, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&new_alert.author_id)
        .bind(&new_alert.message)
        .bind(&new_alert.media_url)
        .bind(new_alert.location.latitude)
        .bind(new_alert.location.longitude)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Every stored alert, oldest first. The proximity filter runs in process,
    /// so this is a plain scan.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sos_alerts ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
