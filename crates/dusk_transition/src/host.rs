//! Capabilities the host application provides

use crate::error::CaptureError;
use dusk_paint::{SnapshotImage, Size};
use std::future::Future;
use std::sync::{PoisonError, RwLock};

/// Rasterizes the application's root view.
///
/// The returned image must show what was rendered when `capture` was
/// called. The controller relies on call order alone to know which theme a
/// frame shows, so implementations must not hand back buffered frames.
pub trait SnapshotCapture: Send + Sync + 'static {
    fn capture(&self) -> impl Future<Output = Result<SnapshotImage, CaptureError>> + Send;
}

/// Reports the size of the area the overlay covers
pub trait Viewport: Send + Sync {
    /// `None` until the host has laid out its window
    fn size(&self) -> Option<Size>;
}

impl Viewport for Size {
    fn size(&self) -> Option<Size> {
        Some(*self)
    }
}

/// A viewport whose size the host updates on resize
#[derive(Debug, Default)]
pub struct SharedViewport {
    size: RwLock<Option<Size>>,
}

impl SharedViewport {
    pub fn new(size: Option<Size>) -> Self {
        Self {
            size: RwLock::new(size),
        }
    }

    pub fn set(&self, size: Size) {
        *self.size.write().unwrap_or_else(PoisonError::into_inner) = Some(size);
    }
}

impl Viewport for SharedViewport {
    fn size(&self) -> Option<Size> {
        *self.size.read().unwrap_or_else(PoisonError::into_inner)
    }
}
