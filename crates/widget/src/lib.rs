//! Rendering-widget seam for the circle-overlay map.
//!
//! The interactive map display is an external collaborator; this crate
//! pins down the narrow surface the core actually uses (`MapWidget`),
//! the descriptors that cross it (sources, layers, paint), the events the
//! widget can emit, and an in-memory backend for tests and the demo app.

mod layer;
mod memory;

pub use layer::{LayerSpec, Paint, SourceData};
pub use memory::{Camera, MemoryWidget};

use circlemap_geo::Coordinate;

/// Events a widget backend delivers to its owner.
///
/// `Loaded` fires once when the initial asynchronous load completes;
/// `Fault` reports any rendering error after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Loaded,
    Fault(String),
}

/// Errors reported by widget mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("source already exists: {0}")]
    DuplicateSource(String),

    #[error("layer already exists: {0}")]
    DuplicateLayer(String),

    #[error("no such source: {0}")]
    MissingSource(String),

    #[error("no such layer: {0}")]
    MissingLayer(String),

    #[error("source still referenced by a layer: {0}")]
    SourceInUse(String),

    #[error("the widget has been removed")]
    Removed,
}

/// Result type for widget mutations
pub type WidgetResult<T> = Result<T, WidgetError>;

/// The rendering-widget surface the core depends on.
///
/// Getters are idempotent. Removing an absent layer or source is an error
/// at this level, so callers check presence first; that mirrors how real
/// map widgets behave and keeps replacement logic explicit.
pub trait MapWidget {
    /// Whether the host environment can render at all. Checked once,
    /// before initialization.
    fn supported(&self) -> bool;

    /// Adds a named geometry source. Fails if the id is taken.
    fn add_source(&mut self, id: &str, data: SourceData) -> WidgetResult<()>;

    /// Adds a layer referencing an existing source.
    fn add_layer(&mut self, layer: LayerSpec) -> WidgetResult<()>;

    /// Removes a layer by id. Fails if absent.
    fn remove_layer(&mut self, id: &str) -> WidgetResult<()>;

    /// Removes a source by id. Fails if absent or still referenced.
    fn remove_source(&mut self, id: &str) -> WidgetResult<()>;

    fn get_layer(&self, id: &str) -> Option<&LayerSpec>;

    fn get_source(&self, id: &str) -> Option<&SourceData>;

    /// Recenters the camera.
    fn fly_to(&mut self, center: Coordinate, zoom: f64) -> WidgetResult<()>;

    /// Destroys the widget and releases its resources. Further mutations
    /// fail with [`WidgetError::Removed`].
    fn remove(&mut self);
}
