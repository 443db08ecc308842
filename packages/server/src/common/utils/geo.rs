//! Geographic distance helpers for the proximity feed.

use serde::{Deserialize, Serialize};

/// A coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters, via the haversine
/// formula. Spherical approximation; accurate to well under a meter at the
/// few-hundred-meter ranges the feed filters on.
pub fn haversine_distance_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
