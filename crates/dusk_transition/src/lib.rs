//! Dusk Theme Transitions
//!
//! Animated light/dark switching: at the moment of interaction the current
//! frame is captured, the theme is switched, the new frame is captured, and
//! the new frame is revealed through a circle that grows from the
//! interaction point until it covers the whole viewport.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dusk_transition::{ThemeTransition, TransitionConfig};
//!
//! // Once, at the application root
//! let root = ThemeTransition::builder(view_capture, viewport)
//!     .preference(&system_preference)
//!     .status_bar(status_bar)
//!     .config(TransitionConfig::default())
//!     .build()?;
//!
//! // Passed down to views
//! let toggle = root.handle();
//! toggle.toggle(pointer.x, pointer.y).await?;
//!
//! // Every frame, on top of the application
//! let overlay = root.renderer();
//! overlay.render(&mut paint_ctx, window_size);
//! ```
//!
//! # Guarantees
//!
//! - A toggle while another is running fails with [`TransitionError::Busy`].
//! - A failed or cancelled toggle restores the previous theme; no overlay is
//!   left on screen.
//! - Captured frames are dropped when the transition settles.

pub mod compositor;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod provider;
pub mod state;

pub use compositor::CompositorRenderer;
pub use config::{ConfigError, TransitionConfig};
pub use controller::TransitionController;
pub use error::{CaptureError, Result, TransitionError};
pub use host::{SharedViewport, SnapshotCapture, Viewport};
pub use provider::{ThemeToggle, ThemeTransition, ThemeTransitionBuilder};
pub use state::{Phase, PhaseKind, TransitionEvent, TransitionState};
