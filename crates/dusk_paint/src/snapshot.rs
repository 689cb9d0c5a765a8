//! Captured frames and object-fit math

use crate::primitives::{Rect, Size};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};

/// An immutable, point-in-time rasterization of a view.
///
/// Clones share the same pixel buffer. The buffer is freed once the last
/// clone is dropped, which is how a finished transition releases its frames.
#[derive(Clone)]
pub struct SnapshotImage {
    pixels: Arc<RgbaImage>,
}

impl SnapshotImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// A single-color frame, mostly useful for headless hosts and tests
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether both handles refer to the same captured buffer
    pub fn ptr_eq(&self, other: &SnapshotImage) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    /// A handle that does not keep the pixels alive
    pub fn downgrade(&self) -> WeakSnapshot {
        WeakSnapshot {
            pixels: Arc::downgrade(&self.pixels),
        }
    }
}

impl fmt::Debug for SnapshotImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Weak reference to a [`SnapshotImage`]
#[derive(Clone, Debug)]
pub struct WeakSnapshot {
    pixels: Weak<RgbaImage>,
}

impl WeakSnapshot {
    pub fn upgrade(&self) -> Option<SnapshotImage> {
        self.pixels.upgrade().map(|pixels| SnapshotImage { pixels })
    }

    /// True once every strong handle has been dropped
    pub fn is_released(&self) -> bool {
        self.pixels.strong_count() == 0
    }
}

/// How an image is fitted into its destination rect (CSS object-fit equivalent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    /// Fill the destination completely, cropping the source (keeps aspect ratio)
    #[default]
    Cover,
    /// Fit entirely within the destination, letterboxing (keeps aspect ratio)
    Contain,
    /// Stretch to the destination (ignores aspect ratio)
    Fill,
}

/// Source region to sample and destination region to draw into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRects {
    pub src: Rect,
    pub dst: Rect,
}

/// Compute the sampling and placement rects for an `image_size` image drawn
/// into `container`, centered on both axes.
pub fn calculate_fit_rects(image_size: Size, container: Rect, fit: ObjectFit) -> FitRects {
    let full_src = image_size.to_rect();
    if !image_size.is_usable() {
        return FitRects {
            src: full_src,
            dst: container,
        };
    }

    match fit {
        ObjectFit::Fill => FitRects {
            src: full_src,
            dst: container,
        },
        ObjectFit::Contain => {
            let scale = (container.width / image_size.width).min(container.height / image_size.height);
            let dst_w = image_size.width * scale;
            let dst_h = image_size.height * scale;
            FitRects {
                src: full_src,
                dst: Rect::new(
                    container.x + (container.width - dst_w) * 0.5,
                    container.y + (container.height - dst_h) * 0.5,
                    dst_w,
                    dst_h,
                ),
            }
        }
        ObjectFit::Cover => {
            let scale = (container.width / image_size.width).max(container.height / image_size.height);
            let src_w = container.width / scale;
            let src_h = container.height / scale;
            FitRects {
                src: Rect::new(
                    (image_size.width - src_w) * 0.5,
                    (image_size.height - src_h) * 0.5,
                    src_w,
                    src_h,
                ),
                dst: container,
            }
        }
    }
}
