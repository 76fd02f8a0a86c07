//! Circle-polygon construction.
//!
//! Approximates a geodesic circle by sweeping a destination point through
//! `steps` evenly spaced bearings. The step count only affects visual
//! smoothness; 64 is plenty for sub-kilometer radii.

use crate::haversine::destination;
use crate::{Coordinate, GeoError, GeoResult};

/// A simple polygon: one closed exterior ring, no holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<Coordinate>,
}

impl Polygon {
    /// The exterior ring. The first and last vertices are equal.
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    /// Ring as `[longitude, latitude]` pairs, GeoJSON vertex order.
    pub fn ring_positions(&self) -> Vec<[f64; 2]> {
        self.ring.iter().map(|c| [c.longitude, c.latitude]).collect()
    }
}

/// Builds a closed polygon approximating a circle of `radius_km` around
/// `center` with `steps` distinct vertices.
pub fn circle_polygon(center: Coordinate, radius_km: f64, steps: usize) -> GeoResult<Polygon> {
    if !center.is_valid() {
        return Err(GeoError::InvalidCoordinate {
            longitude: center.longitude,
            latitude: center.latitude,
        });
    }

    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeoError::InvalidRadius(radius_km));
    }

    if steps < 3 {
        return Err(GeoError::InvalidSteps(steps));
    }

    let mut ring = Vec::with_capacity(steps + 1);
    let step_deg = 360.0 / steps as f64;

    for i in 0..steps {
        ring.push(destination(&center, i as f64 * step_deg, radius_km));
    }

    // Close the ring.
    ring.push(ring[0]);

    Ok(Polygon { ring })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine_distance;

    #[test]
    fn test_circle_ring_is_closed() {
        let center = Coordinate::new(106.799412, -6.244669);
        let polygon = circle_polygon(center, 0.5, 64).unwrap();

        let ring = polygon.ring();
        assert_eq!(ring.len(), 65);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_circle_vertices_at_requested_radius() {
        let center = Coordinate::new(106.799412, -6.244669);
        let polygon = circle_polygon(center, 0.5, 64).unwrap();

        for vertex in polygon.ring() {
            let d = haversine_distance(&center, vertex);
            assert!((d - 0.5).abs() < 1e-6, "vertex at {d} km");
        }
    }

    #[test]
    fn test_circle_vertices_are_distinct() {
        let center = Coordinate::new(0.0, 0.0);
        let polygon = circle_polygon(center, 1.0, 8).unwrap();

        let ring = polygon.ring();
        assert_eq!(ring.len(), 9);
        for (i, a) in ring[..8].iter().enumerate() {
            for b in &ring[i + 1..8] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_circle_rejects_bad_inputs() {
        let center = Coordinate::new(106.799412, -6.244669);

        assert_eq!(
            circle_polygon(Coordinate::new(200.0, 0.0), 0.5, 64),
            Err(GeoError::InvalidCoordinate { longitude: 200.0, latitude: 0.0 })
        );
        assert_eq!(circle_polygon(center, 0.0, 64), Err(GeoError::InvalidRadius(0.0)));
        assert_eq!(circle_polygon(center, -1.0, 64), Err(GeoError::InvalidRadius(-1.0)));
        assert!(matches!(circle_polygon(center, f64::NAN, 64), Err(GeoError::InvalidRadius(_))));
        assert_eq!(circle_polygon(center, 0.5, 2), Err(GeoError::InvalidSteps(2)));
    }

    #[test]
    fn test_geojson_positions_are_lon_lat() {
        let center = Coordinate::new(10.0, 20.0);
        let polygon = circle_polygon(center, 0.5, 16).unwrap();
        let positions = polygon.ring_positions();

        assert_eq!(positions.len(), 17);
        // Vertex 0 is due north of the center: same longitude, larger latitude.
        assert!((positions[0][0] - 10.0).abs() < 1e-9);
        assert!(positions[0][1] > 20.0);
    }
}
