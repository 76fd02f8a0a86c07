//! In-memory widget backend.
//!
//! Records every source, layer, and camera move instead of drawing them.
//! The demo binary renders through it and the controller tests assert
//! against it; it enforces the same preconditions a real widget would
//! (unique ids, layers referencing live sources, no mutation after
//! removal).

use crate::{LayerSpec, MapWidget, SourceData, WidgetError, WidgetResult};
use circlemap_geo::Coordinate;
use std::collections::HashMap;

/// Camera position after the most recent `fly_to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Coordinate,
    pub zoom: f64,
}

#[derive(Debug, Default)]
pub struct MemoryWidget {
    unsupported: bool,
    removed: bool,
    sources: HashMap<String, SourceData>,
    // Layers keep insertion order; draw order matters to a real widget.
    layers: Vec<LayerSpec>,
    camera: Option<Camera>,
}

impl MemoryWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose host lacks the rendering capability; `supported`
    /// returns false and initialization must fail against it.
    pub fn unsupported() -> Self {
        Self { unsupported: true, ..Self::default() }
    }

    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Layer ids in draw order.
    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id.as_str()).collect()
    }

    fn check_alive(&self) -> WidgetResult<()> {
        if self.removed {
            Err(WidgetError::Removed)
        } else {
            Ok(())
        }
    }
}

impl MapWidget for MemoryWidget {
    fn supported(&self) -> bool {
        !self.unsupported
    }

    fn add_source(&mut self, id: &str, data: SourceData) -> WidgetResult<()> {
        self.check_alive()?;

        if self.sources.contains_key(id) {
            return Err(WidgetError::DuplicateSource(id.to_owned()));
        }

        self.sources.insert(id.to_owned(), data);
        Ok(())
    }

    fn add_layer(&mut self, layer: LayerSpec) -> WidgetResult<()> {
        self.check_alive()?;

        if self.layers.iter().any(|l| l.id == layer.id) {
            return Err(WidgetError::DuplicateLayer(layer.id));
        }

        if !self.sources.contains_key(&layer.source) {
            return Err(WidgetError::MissingSource(layer.source));
        }

        self.layers.push(layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> WidgetResult<()> {
        self.check_alive()?;

        let Some(index) = self.layers.iter().position(|l| l.id == id) else {
            return Err(WidgetError::MissingLayer(id.to_owned()));
        };

        self.layers.remove(index);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> WidgetResult<()> {
        self.check_alive()?;

        if !self.sources.contains_key(id) {
            return Err(WidgetError::MissingSource(id.to_owned()));
        }

        if self.layers.iter().any(|l| l.source == id) {
            return Err(WidgetError::SourceInUse(id.to_owned()));
        }

        self.sources.remove(id);
        Ok(())
    }

    fn get_layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn get_source(&self, id: &str) -> Option<&SourceData> {
        self.sources.get(id)
    }

    fn fly_to(&mut self, center: Coordinate, zoom: f64) -> WidgetResult<()> {
        self.check_alive()?;
        self.camera = Some(Camera { center, zoom });
        Ok(())
    }

    fn remove(&mut self) {
        self.removed = true;
        self.sources.clear();
        self.layers.clear();
        self.camera = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlemap_geo::Feature;

    fn source() -> SourceData {
        SourceData::geojson(Feature::point(Coordinate::new(0.0, 0.0)))
    }

    #[test]
    fn layers_require_existing_source() {
        let mut widget = MemoryWidget::new();

        let err = widget.add_layer(LayerSpec::fill("fill", "missing", "#fff", 0.5));
        assert_eq!(err, Err(WidgetError::MissingSource("missing".to_owned())));

        widget.add_source("s", source()).unwrap();
        widget.add_layer(LayerSpec::fill("fill", "s", "#fff", 0.5)).unwrap();
        assert_eq!(widget.layer_ids(), vec!["fill"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut widget = MemoryWidget::new();
        widget.add_source("s", source()).unwrap();
        widget.add_layer(LayerSpec::fill("fill", "s", "#fff", 0.5)).unwrap();

        assert_eq!(
            widget.add_source("s", source()),
            Err(WidgetError::DuplicateSource("s".to_owned()))
        );
        assert_eq!(
            widget.add_layer(LayerSpec::line("fill", "s", "#fff", 1.0)),
            Err(WidgetError::DuplicateLayer("fill".to_owned()))
        );
    }

    #[test]
    fn removing_absent_ids_errors() {
        let mut widget = MemoryWidget::new();

        assert_eq!(widget.remove_layer("x"), Err(WidgetError::MissingLayer("x".to_owned())));
        assert_eq!(widget.remove_source("x"), Err(WidgetError::MissingSource("x".to_owned())));
    }

    #[test]
    fn source_cannot_be_removed_while_referenced() {
        let mut widget = MemoryWidget::new();
        widget.add_source("s", source()).unwrap();
        widget.add_layer(LayerSpec::fill("fill", "s", "#fff", 0.5)).unwrap();

        assert_eq!(widget.remove_source("s"), Err(WidgetError::SourceInUse("s".to_owned())));

        widget.remove_layer("fill").unwrap();
        widget.remove_source("s").unwrap();
        assert_eq!(widget.source_count(), 0);
    }

    #[test]
    fn layer_order_follows_insertion() {
        let mut widget = MemoryWidget::new();
        widget.add_source("s", source()).unwrap();
        widget.add_layer(LayerSpec::fill("a", "s", "#fff", 0.5)).unwrap();
        widget.add_layer(LayerSpec::line("b", "s", "#fff", 1.0)).unwrap();

        assert_eq!(widget.layer_ids(), vec!["a", "b"]);
    }

    #[test]
    fn removal_is_terminal() {
        let mut widget = MemoryWidget::new();
        widget.add_source("s", source()).unwrap();
        widget.remove();

        assert!(widget.is_removed());
        assert_eq!(widget.source_count(), 0);
        assert_eq!(widget.add_source("s", source()), Err(WidgetError::Removed));
        assert_eq!(
            widget.fly_to(Coordinate::new(0.0, 0.0), 11.0),
            Err(WidgetError::Removed)
        );
    }

    #[test]
    fn unsupported_backend_reports_it() {
        assert!(MemoryWidget::new().supported());
        assert!(!MemoryWidget::unsupported().supported());
    }
}
