//! Map lifecycle controller.
//!
//! Owns the widget instance and tracks its asynchronous load lifecycle:
//! `Initializing → Ready | Failed` (a controller that has not been
//! constructed yet is the implicit uninitialized state). `Ready` and
//! `Failed` are terminal; recovering from a fault means building a new
//! controller over a fresh widget.
//!
//! Overlay updates requested before the load completes are parked in a
//! single pending slot with latest-wins semantics and flushed exactly once
//! on the ready transition.

use crate::config::MapConfig;
use crate::error::{MapError, MapResult};
use crate::overlay::{apply_overlay, OverlayRequest};
use circlemap_geo::Coordinate;
use circlemap_widget::{MapWidget, WidgetEvent};
use tracing::{error, info, warn};

/// Widget load lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Widget created, initial load still in flight.
    Initializing,

    /// Initial load complete; layer and source mutations are accepted.
    Ready,

    /// A fault was reported. Terminal; overlay operations are suspended.
    Failed,
}

/// Owner of one map widget instance
pub struct MapController<W: MapWidget> {
    widget: Option<W>,
    config: MapConfig,
    state: LifecycleState,
    pending: Option<OverlayRequest>,
    last_error: Option<String>,
}

impl<W: MapWidget> MapController<W> {
    /// Takes ownership of `widget` and starts its load lifecycle.
    ///
    /// Fails with [`MapError::Initialization`] when the host environment
    /// lacks the rendering capability; in that case no ready event will
    /// ever be observed.
    pub fn initialize(mut widget: W, config: MapConfig) -> MapResult<Self> {
        if !widget.supported() {
            error!("host environment does not support map rendering");
            return Err(MapError::Initialization(
                "the host environment does not support map rendering".to_owned(),
            ));
        }

        widget
            .fly_to(config.initial_center, config.initial_zoom)
            .map_err(|e| MapError::Initialization(e.to_string()))?;

        info!(style = %config.style, "map initializing");

        Ok(Self {
            widget: Some(widget),
            config,
            state: LifecycleState::Initializing,
            pending: None,
            last_error: None,
        })
    }

    /// Drives the state machine with an event from the widget backend.
    ///
    /// `Loaded` fires the one-time ready transition and flushes the
    /// pending overlay request; later `Loaded` events are ignored.
    /// `Fault` moves the controller to `Failed` and drops any pending
    /// request. Events arriving after teardown are ignored.
    pub fn handle_event(&mut self, event: WidgetEvent) {
        if self.widget.is_none() {
            return;
        }

        match event {
            WidgetEvent::Loaded => {
                if self.state != LifecycleState::Initializing {
                    return;
                }

                self.state = LifecycleState::Ready;
                info!("map loaded");

                if let Some(request) = self.pending.take() {
                    if let Err(e) = self.apply(&request) {
                        error!(%e, "deferred overlay update failed");
                    }
                }
            }
            WidgetEvent::Fault(message) => {
                error!(%message, "map rendering fault");
                self.state = LifecycleState::Failed;
                self.last_error = Some(message);
                self.pending = None;
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Synchronous readiness predicate. Checking this before registering
    /// interest in the ready transition makes missed-event races
    /// impossible in this single-threaded model.
    pub fn is_ready(&self) -> bool {
        self.state == LifecycleState::Ready
    }

    /// The most recent user-visible error message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The deferred overlay request, if the widget is not ready yet.
    pub fn pending_overlay(&self) -> Option<OverlayRequest> {
        self.pending
    }

    /// The owned widget, for inspection. `None` after teardown.
    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    /// Replaces the circle overlay at `center` with the configured radius.
    pub fn update_overlay(&mut self, center: Coordinate) -> MapResult<()> {
        self.update_overlay_with_radius(center, self.config.radius_km)
    }

    /// Replaces the circle overlay at `center` with an explicit radius.
    ///
    /// Before the ready transition the request is deferred, latest wins.
    /// After a fault or teardown the call is rejected.
    pub fn update_overlay_with_radius(
        &mut self,
        center: Coordinate,
        radius_km: f64,
    ) -> MapResult<()> {
        if self.widget.is_none() {
            return Err(MapError::TornDown);
        }

        let request = OverlayRequest::new(center, radius_km);

        match self.state {
            LifecycleState::Failed => Err(MapError::Rendering(
                self.last_error.clone().unwrap_or_else(|| "rendering fault".to_owned()),
            )),
            LifecycleState::Initializing => {
                if let Some(previous) = self.pending.replace(request) {
                    warn!(
                        longitude = previous.center.longitude,
                        latitude = previous.center.latitude,
                        "deferred overlay request superseded"
                    );
                }
                Ok(())
            }
            LifecycleState::Ready => {
                let result = self.apply(&request);
                if let Err(ref e) = result {
                    error!(%e, "overlay update failed");
                }
                result
            }
        }
    }

    /// Releases the widget. Safe to call more than once; only the first
    /// call does anything. Any deferred overlay request is dropped.
    pub fn teardown(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.remove();
            self.pending = None;
            info!("map widget released");
        }
    }

    fn apply(&mut self, request: &OverlayRequest) -> MapResult<()> {
        let Some(widget) = self.widget.as_mut() else {
            return Err(MapError::TornDown);
        };

        let result = apply_overlay(widget, request, &self.config);
        if let Err(ref e) = result {
            self.last_error = Some(e.to_string());
        }
        result
    }
}

impl<W: MapWidget> Drop for MapController<W> {
    fn drop(&mut self) {
        // Unconditional release, early-return and error paths included.
        self.teardown();
    }
}
