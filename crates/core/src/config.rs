//! Map configuration.
//!
//! The access token is opaque pass-through for the rendering backend; the
//! core never validates or defaults it. Everything else mirrors the knobs
//! of the original demo (style, initial camera, circle radius).

use circlemap_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Default center: Blok M, Jakarta.
pub const DEFAULT_CENTER: Coordinate = Coordinate { longitude: 106.799412, latitude: -6.244669 };

/// Default circle radius in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 0.5;

/// Default number of distinct circle-polygon vertices.
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Configuration for a map controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Access credential for the rendering backend, if it needs one.
    pub access_token: Option<String>,

    /// Style reference understood by the rendering backend.
    pub style: String,

    /// Camera center at initialization.
    pub initial_center: Coordinate,

    /// Camera zoom at initialization.
    pub initial_zoom: f64,

    /// Zoom applied when recentering onto an updated overlay.
    pub fly_to_zoom: f64,

    /// Circle radius in kilometers.
    pub radius_km: f64,

    /// Distinct vertices in the circle polygon.
    pub circle_steps: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            style: "mapbox://styles/mapbox/streets-v11".to_owned(),
            initial_center: DEFAULT_CENTER,
            initial_zoom: 15.0,
            fly_to_zoom: 11.0,
            radius_km: DEFAULT_RADIUS_KM,
            circle_steps: DEFAULT_CIRCLE_STEPS,
        }
    }
}

impl MapConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the style reference
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the initial camera center
    pub fn with_initial_center(mut self, center: Coordinate) -> Self {
        self.initial_center = center;
        self
    }

    /// Set the circle radius in kilometers
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Set the circle vertex count
    pub fn with_circle_steps(mut self, steps: usize) -> Self {
        self.circle_steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.initial_center, DEFAULT_CENTER);
        assert_eq!(config.initial_zoom, 15.0);
        assert_eq!(config.fly_to_zoom, 11.0);
        assert_eq!(config.radius_km, 0.5);
        assert_eq!(config.circle_steps, 64);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = MapConfig::new()
            .with_access_token("pk.test")
            .with_radius_km(1.2)
            .with_circle_steps(32);

        assert_eq!(config.access_token.as_deref(), Some("pk.test"));
        assert_eq!(config.radius_km, 1.2);
        assert_eq!(config.circle_steps, 32);
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let config: MapConfig = serde_json::from_str(r#"{"radius_km": 2.0}"#).unwrap();
        assert_eq!(config.radius_km, 2.0);
        assert_eq!(config.circle_steps, 64);
    }
}
