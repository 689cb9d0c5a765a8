//! Transition error types

use crate::state::PhaseKind;
use std::time::Duration;
use thiserror::Error;

/// A view could not be rasterized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The view to capture is not attached to a window
    #[error("view is not mounted")]
    NotMounted,

    /// The capture did not complete in time
    #[error("capture timed out after {0:?}")]
    Timeout(Duration),

    /// Backend-specific failure
    #[error("capture failed: {0}")]
    Failed(String),
}

/// Why a `toggle` did not complete
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// One of the two captures failed; the pre-toggle theme was restored
    #[error("snapshot capture failed: {0}")]
    Capture(#[from] CaptureError),

    /// The viewport size is not known yet, so no covering radius exists
    #[error("viewport size is not available")]
    GeometryUnavailable,

    /// The interaction point is not a finite coordinate
    #[error("invalid interaction point ({x}, {y})")]
    InvalidOrigin { x: f32, y: f32 },

    /// Another transition is still in flight
    #[error("a theme transition is already in progress")]
    Busy,

    /// An event arrived in a phase that has no transition for it
    #[error("event `{event}` is not valid in phase {phase}")]
    UnexpectedEvent { phase: PhaseKind, event: &'static str },
}

/// Result type for transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;
