//! Error taxonomy for the map core.
//!
//! All three failure kinds are terminal for the current widget instance:
//! none are retried, and recovery means creating a new controller.

/// Errors surfaced by the lifecycle controller and overlay updater
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The host environment cannot support the rendering capability.
    /// Fatal; no ready event will ever fire.
    #[error("failed to initialize the map: {0}")]
    Initialization(String),

    /// The widget reported an asynchronous rendering fault. Overlay
    /// operations are suspended from this point on.
    #[error("the map reported a rendering fault: {0}")]
    Rendering(String),

    /// A single overlay update failed. The overlay stays in its last
    /// successfully applied state (or stays absent).
    #[error("failed to update the circle overlay: {0}")]
    OverlayUpdate(String),

    /// Operation attempted after teardown.
    #[error("the map widget has been torn down")]
    TornDown,
}

/// Result type for map core operations
pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapError::Initialization("WebGL unavailable".to_owned());
        assert_eq!(err.to_string(), "failed to initialize the map: WebGL unavailable");

        let err = MapError::OverlayUpdate("bad coordinate".to_owned());
        assert!(err.to_string().contains("circle overlay"));
    }
}
