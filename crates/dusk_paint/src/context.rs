//! Paint context - records drawing commands for the host surface

use crate::primitives::{Circle, Rect};
use crate::snapshot::{calculate_fit_rects, FitRects, ObjectFit, SnapshotImage};
use smallvec::SmallVec;

/// An image used as a shader: the image is laid out over `bounds` with `fit`
/// and only the pixels inside the filled shape are shown.
#[derive(Clone, Debug)]
pub struct ImageFill {
    pub image: SnapshotImage,
    pub bounds: Rect,
    pub fit: ObjectFit,
}

impl ImageFill {
    pub fn new(image: SnapshotImage, bounds: Rect, fit: ObjectFit) -> Self {
        Self { image, bounds, fit }
    }

    /// Source and destination rects for the shader's image layout
    pub fn fit_rects(&self) -> FitRects {
        calculate_fit_rects(self.image.size(), self.bounds, self.fit)
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug)]
pub enum PaintCommand {
    /// Draw the `src` region of an image into `dst`
    DrawImage {
        image: SnapshotImage,
        src: Rect,
        dst: Rect,
    },
    /// Fill a circle with an image shader
    FillCircle { circle: Circle, fill: ImageFill },
}

/// The paint context used by overlays
///
/// Commands are recorded in order and replayed by the host's compositing
/// surface; later commands draw on top of earlier ones.
pub struct PaintContext {
    commands: SmallVec<[PaintCommand; 4]>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands).into_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Draw an image into `dst` using `fit`
    pub fn draw_image(&mut self, image: &SnapshotImage, dst: Rect, fit: ObjectFit) {
        let FitRects { src, dst } = calculate_fit_rects(image.size(), dst, fit);
        self.commands.push(PaintCommand::DrawImage {
            image: image.clone(),
            src,
            dst,
        });
    }

    /// Fill a circle with an image shader.
    ///
    /// Degenerate circles (non-positive or non-finite radius) cover no pixels
    /// and are not recorded.
    pub fn fill_circle(&mut self, circle: Circle, fill: ImageFill) {
        if !(circle.radius.is_finite() && circle.radius > 0.0) {
            tracing::trace!(radius = circle.radius, "skipping empty circle fill");
            return;
        }
        self.commands.push(PaintCommand::FillCircle { circle, fill });
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point, Size};

    #[test]
    fn test_records_in_order() {
        let before = SnapshotImage::solid(30, 80, [255, 255, 255, 255]);
        let after = SnapshotImage::solid(30, 80, [0, 0, 0, 255]);
        let viewport = Size::new(30.0, 80.0).to_rect();

        let mut ctx = PaintContext::new();
        ctx.draw_image(&before, viewport, ObjectFit::Fill);
        ctx.fill_circle(
            Circle::new(Point::new(10.0, 10.0), 5.0),
            ImageFill::new(after.clone(), viewport, ObjectFit::Cover),
        );

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            PaintCommand::DrawImage { image, dst, .. } => {
                assert!(image.ptr_eq(&before));
                assert_eq!(*dst, viewport);
            }
            other => panic!("unexpected command {other:?}"),
        }
        match &commands[1] {
            PaintCommand::FillCircle { circle, fill } => {
                assert_eq!(circle.radius, 5.0);
                assert!(fill.image.ptr_eq(&after));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_zero_radius_circle_not_recorded() {
        let image = SnapshotImage::solid(2, 2, [0, 0, 0, 255]);
        let mut ctx = PaintContext::new();
        ctx.fill_circle(
            Circle::new(Point::ZERO, 0.0),
            ImageFill::new(image, Rect::new(0.0, 0.0, 2.0, 2.0), ObjectFit::Cover),
        );
        assert!(ctx.is_empty());
    }
}
