//! Proximity feed filter - selects which alerts a viewer should see

use crate::common::utils::geo::{haversine_distance_meters, GeoPoint};
use crate::domains::alerts::models::SosAlert;

/// Radius applied when the caller does not ask for one, in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 500.0;

/// Alerts within `radius_meters` of `viewer`, excluding the viewer's own.
///
/// Pure filter over the supplied records. A distance exactly equal to the
/// radius is included. Input order is preserved; no ordering by distance or
/// recency is implied.
pub fn nearby_alerts(
    viewer: GeoPoint,
    viewer_id: &str,
    alerts: Vec<SosAlert>,
    radius_meters: f64,
) -> Vec<SosAlert> {
    alerts
        .into_iter()
        .filter(|alert| {
            haversine_distance_meters(viewer, alert.location()) <= radius_meters
                && alert.author_id != viewer_id
        })
        .collect()
}
