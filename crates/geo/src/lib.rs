//! Geospatial primitives for the circle-overlay map.
//!
//! This crate provides:
//! - A validated geographic `Coordinate` (longitude/latitude in degrees)
//! - Haversine distance on a spherical earth
//! - Circle-polygon construction via geodesic destination points
//! - Minimal GeoJSON feature types for the widget source payload
//!
//! # Example
//!
//! ```
//! use circlemap_geo::{circle_polygon, haversine_distance, Coordinate};
//!
//! let center = Coordinate::new(106.799412, -6.244669);
//! let polygon = circle_polygon(center, 0.5, 64).unwrap();
//!
//! // 64 distinct vertices plus the closing repeat of the first one.
//! assert_eq!(polygon.ring().len(), 65);
//! for vertex in polygon.ring() {
//!     let d = haversine_distance(&center, vertex);
//!     assert!((d - 0.5).abs() < 1e-6);
//! }
//! ```

mod circle;
mod geojson;
mod haversine;

pub use circle::{circle_polygon, Polygon};
pub use geojson::{Feature, Geometry};
pub use haversine::{destination, haversine_distance, EARTH_RADIUS_KM};

use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate. No validation is performed here;
    /// call [`Coordinate::is_valid`] before feeding user input downstream.
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Returns true if both components are finite and within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && self.longitude >= -180.0
            && self.longitude <= 180.0
            && self.latitude >= -90.0
            && self.latitude <= 90.0
    }

    /// Converts to (latitude, longitude) radians for spherical math.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

/// Errors produced by geometry construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("coordinate out of range: ({longitude}, {latitude})")]
    InvalidCoordinate { longitude: f64, latitude: f64 },

    #[error("circle radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("circle polygon needs at least 3 steps, got {0}")]
    InvalidSteps(usize),
}

/// Result type for geometry operations
pub type GeoResult<T> = Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(106.799412, -6.244669);
        assert_eq!(coord.longitude, 106.799412);
        assert_eq!(coord.latitude, -6.244669);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(180.0, 90.0).is_valid());
        assert!(Coordinate::new(-180.0, -90.0).is_valid());
        assert!(!Coordinate::new(181.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 91.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (106.799412, -6.244669).into();
        assert_eq!(coord.longitude, 106.799412);
    }
}
