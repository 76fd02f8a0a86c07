//! Minimal GeoJSON types for the widget source payload.
//!
//! Only the shapes the overlay needs are modelled (a polygon feature and a
//! point feature); this is a wire format, not a general GeoJSON library.

use crate::{Coordinate, Polygon};
use serde::{Deserialize, Serialize};

/// GeoJSON geometry, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// A GeoJSON feature. Serializes with `"type": "Feature"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: serde_json::Value,
}

impl Feature {
    /// Wraps a point coordinate in a feature.
    pub fn point(coordinate: Coordinate) -> Self {
        Self {
            geometry: Geometry::Point {
                coordinates: [coordinate.longitude, coordinate.latitude],
            },
            properties: serde_json::Value::Null,
        }
    }

    /// Wraps a polygon (single exterior ring) in a feature.
    pub fn polygon(polygon: &Polygon) -> Self {
        Self {
            geometry: Geometry::Polygon { coordinates: vec![polygon.ring_positions()] },
            properties: serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle_polygon;

    #[test]
    fn test_point_feature_serialization() {
        let feature = Feature::point(Coordinate::new(106.799412, -6.244669));
        let json = serde_json::to_value(&feature).unwrap();

        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Point");
        assert_eq!(json["geometry"]["coordinates"][0], 106.799412);
        assert_eq!(json["geometry"]["coordinates"][1], -6.244669);
    }

    #[test]
    fn test_polygon_feature_serialization() {
        let polygon = circle_polygon(Coordinate::new(0.0, 0.0), 0.5, 8).unwrap();
        let feature = Feature::polygon(&polygon);
        let json = serde_json::to_value(&feature).unwrap();

        assert_eq!(json["geometry"]["type"], "Polygon");
        let ring = json["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 9);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_feature_round_trips_through_json() {
        let polygon = circle_polygon(Coordinate::new(10.0, 20.0), 0.5, 8).unwrap();
        let feature = Feature::polygon(&polygon);

        let json = serde_json::to_string(&feature).unwrap();
        let parsed: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, feature);
    }
}
