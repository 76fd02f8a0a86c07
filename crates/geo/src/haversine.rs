//! Spherical-earth distance and destination-point math.

use crate::Coordinate;

/// Mean earth radius in kilometers (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Destination point given a start, an initial bearing (degrees clockwise
/// from north) and a distance in kilometers.
pub fn destination(start: &Coordinate, bearing_deg: f64, distance_km: f64) -> Coordinate {
    let (lat1, lon1) = start.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(normalize_longitude(lon2.to_degrees()), lat2.to_degrees())
}

/// Wraps a longitude in degrees into [-180, 180].
fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps exact +180 inputs to -180; keep +180 as-is.
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}
