//! Circle overlay replacement.
//!
//! The overlay is never patched in place: every update removes whatever is
//! currently drawn (layers first, then their source) and re-adds the whole
//! thing. The removal set is computed as an explicit plan from the ids
//! actually present on the widget, so replacing an absent overlay is a
//! no-op rather than an error, and a failed update can never leave the
//! widget worse off than "no overlay".

use crate::config::MapConfig;
use crate::error::{MapError, MapResult};
use circlemap_geo::{circle_polygon, Coordinate, Feature};
use circlemap_widget::{LayerSpec, MapWidget, SourceData};
use tracing::{debug, info};

pub const CIRCLE_SOURCE_ID: &str = "circle";
pub const CIRCLE_FILL_LAYER_ID: &str = "circle-fill";
pub const CIRCLE_OUTLINE_LAYER_ID: &str = "circle-outline";

pub const CIRCLE_FILL_COLOR: &str = "#00b3fd";
pub const CIRCLE_FILL_OPACITY: f64 = 0.3;
pub const CIRCLE_OUTLINE_COLOR: &str = "#007cbf";
pub const CIRCLE_OUTLINE_WIDTH: f64 = 2.0;

/// A requested overlay: where and how big.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRequest {
    pub center: Coordinate,
    pub radius_km: f64,
}

impl OverlayRequest {
    pub fn new(center: Coordinate, radius_km: f64) -> Self {
        Self { center, radius_km }
    }
}

/// One step of an overlay removal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOp {
    Layer(&'static str),
    Source(&'static str),
}

/// Computes the removal steps for the overlay ids present on `widget`.
///
/// Layers come before their source; ids that are absent contribute
/// nothing, which makes applying the plan idempotent.
pub fn removal_plan<W: MapWidget>(widget: &W) -> Vec<RemoveOp> {
    let mut plan = Vec::with_capacity(3);

    if widget.get_layer(CIRCLE_FILL_LAYER_ID).is_some() {
        plan.push(RemoveOp::Layer(CIRCLE_FILL_LAYER_ID));
    }
    if widget.get_layer(CIRCLE_OUTLINE_LAYER_ID).is_some() {
        plan.push(RemoveOp::Layer(CIRCLE_OUTLINE_LAYER_ID));
    }
    if widget.get_source(CIRCLE_SOURCE_ID).is_some() {
        plan.push(RemoveOp::Source(CIRCLE_SOURCE_ID));
    }

    plan
}

/// Replaces the circle overlay on a ready widget and recenters the view.
///
/// Synchronous; from the caller's perspective the overlay goes from its
/// previous state to the new one (or to absent, if computation fails
/// before the add phase) in one step.
pub fn apply_overlay<W: MapWidget>(
    widget: &mut W,
    request: &OverlayRequest,
    config: &MapConfig,
) -> MapResult<()> {
    // Validate and compute before touching the widget, so an invalid
    // request leaves the existing overlay alone.
    let polygon = circle_polygon(request.center, request.radius_km, config.circle_steps)
        .map_err(|e| MapError::OverlayUpdate(e.to_string()))?;

    let plan = removal_plan(widget);
    debug!(ops = plan.len(), "clearing previous overlay");

    for op in plan {
        match op {
            RemoveOp::Layer(id) => widget.remove_layer(id),
            RemoveOp::Source(id) => widget.remove_source(id),
        }
        .map_err(|e| MapError::OverlayUpdate(e.to_string()))?;
    }

    widget
        .add_source(CIRCLE_SOURCE_ID, SourceData::geojson(Feature::polygon(&polygon)))
        .map_err(|e| MapError::OverlayUpdate(e.to_string()))?;

    widget
        .add_layer(LayerSpec::fill(
            CIRCLE_FILL_LAYER_ID,
            CIRCLE_SOURCE_ID,
            CIRCLE_FILL_COLOR,
            CIRCLE_FILL_OPACITY,
        ))
        .map_err(|e| MapError::OverlayUpdate(e.to_string()))?;

    widget
        .add_layer(LayerSpec::line(
            CIRCLE_OUTLINE_LAYER_ID,
            CIRCLE_SOURCE_ID,
            CIRCLE_OUTLINE_COLOR,
            CIRCLE_OUTLINE_WIDTH,
        ))
        .map_err(|e| MapError::OverlayUpdate(e.to_string()))?;

    widget
        .fly_to(request.center, config.fly_to_zoom)
        .map_err(|e| MapError::OverlayUpdate(e.to_string()))?;

    info!(
        longitude = request.center.longitude,
        latitude = request.center.latitude,
        radius_km = request.radius_km,
        "circle overlay applied"
    );

    Ok(())
}
