//! SOS alert endpoints
//!
//! POST /alerts broadcasts an alert; GET /alerts/nearby is the viewer's
//! proximity-filtered feed. Wire keys are camelCase to match the mobile
//! client.

use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::common::utils::geo::GeoPoint;
use crate::domains::alerts::actions::{nearby_alerts, DEFAULT_RADIUS_METERS};
use crate::domains::alerts::models::{NewSosAlert, SosAlert};
use crate::server::app::AppState;
use crate::server::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub location: GeoPoint,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub viewer_id: String,
    pub radius_meters: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub id: Uuid,
    pub user_id: String,
    pub message: String,
    pub media_url: Option<String>,
    pub location: GeoPoint,
    pub created_at: DateTime<Utc>,
}

impl From<SosAlert> for AlertResponse {
    fn from(alert: SosAlert) -> Self {
        let location = alert.location();
        Self {
            id: alert.id,
            user_id: alert.author_id,
            message: alert.message,
            media_url: alert.media_url,
            location,
            created_at: alert.created_at,
        }
    }
}

/// Broadcast a new SOS alert.
pub async fn create_alert_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<AlertResponse>), AppError> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::BadRequest("userId is required.".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("message is required.".to_string()));
    }

    let new_alert = NewSosAlert {
        author_id: request.user_id,
        message: request.message,
        media_url: request.media_url,
        location: request.location,
    };

    let created = state.deps.alert_store.insert_alert(new_alert).await?;
    info!("SOS alert {} broadcast by {}", created.id, created.author_id);

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Alerts near the viewer, excluding their own.
pub async fn nearby_alerts_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<AlertResponse>>, AppError> {
    let viewer = GeoPoint {
        latitude: query.latitude,
        longitude: query.longitude,
    };
    let radius_meters = query.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);

    let alerts = state.deps.alert_store.list_all().await?;
    let feed = nearby_alerts(viewer, &query.viewer_id, alerts, radius_meters);

    Ok(Json(feed.into_iter().map(AlertResponse::from).collect()))
}
