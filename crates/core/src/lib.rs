//! Circle-overlay map core
//!
//! Lifecycle controller and overlay updater for an interactive map that
//! draws a fixed-radius circle around a user-adjustable center.

pub mod config;
pub mod controller;
pub mod error;
pub mod overlay;

pub use config::{MapConfig, DEFAULT_CENTER, DEFAULT_CIRCLE_STEPS, DEFAULT_RADIUS_KM};
pub use controller::{LifecycleState, MapController};
pub use error::{MapError, MapResult};
pub use overlay::{
    apply_overlay, removal_plan, OverlayRequest, RemoveOp, CIRCLE_FILL_LAYER_ID,
    CIRCLE_OUTLINE_LAYER_ID, CIRCLE_SOURCE_ID,
};
