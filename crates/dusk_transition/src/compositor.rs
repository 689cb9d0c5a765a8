//! Overlay compositor
//!
//! Per frame, paints the transition overlay on top of the application:
//!
//! - nothing while the state is `Idle`
//! - the pre-switch frame, full-bleed
//! - once the post-switch frame exists, a circle filled with it whose radius
//!   is the covering radius scaled by the animation progress
//!
//! The renderer reads committed state and progress and never writes either.

use crate::state::{Phase, TransitionState};
use dusk_animation::ProgressReader;
use dusk_paint::{ImageFill, ObjectFit, PaintContext, Size};
use tokio::sync::watch;

/// Draws the reveal overlay from the latest committed [`TransitionState`]
#[derive(Clone, Debug)]
pub struct CompositorRenderer {
    state: watch::Receiver<TransitionState>,
    progress: ProgressReader,
    fit: ObjectFit,
}

impl CompositorRenderer {
    pub fn new(
        state: watch::Receiver<TransitionState>,
        progress: ProgressReader,
        fit: ObjectFit,
    ) -> Self {
        Self {
            state,
            progress,
            fit,
        }
    }

    /// Whether the overlay should be mounted at all
    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_active()
    }

    /// The overlay never handles pointer input; events go to the application
    pub fn accepts_input(&self) -> bool {
        false
    }

    /// Radius of the reveal circle for the current frame, if one is drawn
    pub fn reveal_radius(&self) -> Option<f32> {
        let state = self.state.borrow();
        self.reveal_progress(&state)
            .zip(state.circle())
            .map(|(progress, circle)| circle.radius * progress)
    }

    /// Record this frame's overlay into `ctx`
    pub fn render(&self, ctx: &mut PaintContext, viewport: Size) {
        let state = self.state.borrow().clone();
        if !state.is_active() {
            return;
        }
        let bounds = viewport.to_rect();

        let Some(before) = state.image_before() else {
            return;
        };
        ctx.draw_image(before, bounds, ObjectFit::Fill);

        if let (Some(after), Some(circle), Some(progress)) = (
            state.image_after(),
            state.circle(),
            self.reveal_progress(&state),
        ) {
            let circle = circle.scaled(progress);
            tracing::trace!(
                phase = %state.kind(),
                progress,
                radius = circle.radius,
                "compositing reveal"
            );
            ctx.fill_circle(circle, ImageFill::new(after.clone(), bounds, self.fit));
        }
    }

    /// Progress applies only once the animation has been started; before
    /// that the circle is held at zero.
    fn reveal_progress(&self, state: &TransitionState) -> Option<f32> {
        match state.phase() {
            Phase::AfterCaptured { .. } => Some(0.0),
            Phase::Animating { .. } => Some(self.progress.get().clamp(0.0, 1.0)),
            _ => None,
        }
    }
}
