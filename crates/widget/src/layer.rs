//! Source and layer descriptors crossing the widget seam.

use circlemap_geo::Feature;
use serde::{Deserialize, Serialize};

/// Data backing a geometry source. Only GeoJSON sources exist here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceData {
    pub data: Feature,
}

impl SourceData {
    pub fn geojson(data: Feature) -> Self {
        Self { data }
    }
}

/// Paint properties, tagged the way map style documents tag layer types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Paint {
    Fill { color: String, opacity: f64 },
    Line { color: String, width: f64 },
}

/// A render layer bound to a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    pub paint: Paint,
}

impl LayerSpec {
    /// A semi-transparent fill layer.
    pub fn fill(id: &str, source: &str, color: &str, opacity: f64) -> Self {
        Self {
            id: id.to_owned(),
            source: source.to_owned(),
            paint: Paint::Fill { color: color.to_owned(), opacity },
        }
    }

    /// An opaque stroke layer.
    pub fn line(id: &str, source: &str, color: &str, width: f64) -> Self {
        Self {
            id: id.to_owned(),
            source: source.to_owned(),
            paint: Paint::Line { color: color.to_owned(), width },
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self.paint, Paint::Fill { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self.paint, Paint::Line { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_and_line_constructors_set_paint_kind() {
        let fill = LayerSpec::fill("circle-fill", "circle", "#00b3fd", 0.3);
        assert!(fill.is_fill());
        assert!(!fill.is_line());
        assert_eq!(fill.source, "circle");

        let line = LayerSpec::line("circle-outline", "circle", "#007cbf", 2.0);
        assert!(line.is_line());
        assert_eq!(line.id, "circle-outline");
    }

    #[test]
    fn paint_serializes_with_type_tag() {
        let paint = Paint::Fill { color: "#00b3fd".to_owned(), opacity: 0.3 };
        let json = serde_json::to_value(&paint).unwrap();

        assert_eq!(json["type"], "fill");
        assert_eq!(json["color"], "#00b3fd");
        assert_eq!(json["opacity"], 0.3);
    }
}
