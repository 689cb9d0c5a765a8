//! Dusk Paint
//!
//! The drawing vocabulary shared by the theme transition overlay and its host.
//!
//! # Features
//!
//! - Geometry primitives (point, size, rect, circle)
//! - Covering-circle computation for reveal masks
//! - Immutable captured frames ([`SnapshotImage`]) with cheap clones
//! - CSS-style object-fit math for image fills
//! - A recording [`PaintContext`] whose commands the host surface replays

pub mod context;
pub mod primitives;
pub mod snapshot;

pub use context::{ImageFill, PaintCommand, PaintContext};
pub use primitives::*;
pub use snapshot::{calculate_fit_rects, FitRects, ObjectFit, SnapshotImage, WeakSnapshot};
