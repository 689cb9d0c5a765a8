//! Dusk Animation System
//!
//! Time-driven progress values for overlay transitions.
//!
//! # Features
//!
//! - **Easing**: Monotonic curves including CSS-style cubic beziers
//! - **Timing**: Fixed-duration runs that land exactly on 1.0
//! - **Driver**: A single-writer progress value with read-only handles for renderers

pub mod driver;
pub mod easing;
pub mod timing;

pub use driver::{AnimationDriver, ProgressReader};
pub use easing::Easing;
pub use timing::Timing;
