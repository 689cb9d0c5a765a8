//! A windowless host for transitions
//!
//! [`HeadlessView`] repaints itself a few milliseconds after every committed
//! theme change, like a real view that only shows a new theme once its next
//! frame is drawn. [`HeadlessCapture`] rasterizes whatever was last painted.

use dusk_paint::{Size, SnapshotImage};
use dusk_theme::{StatusBar, StatusBarStyle, ThemeName};
use dusk_transition::{CaptureError, SnapshotCapture, TransitionState};
use image::{Rgba, RgbaImage};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Time between a theme commit and the view showing it
pub const RENDER_LATENCY: Duration = Duration::from_millis(8);

/// Pixels per captured frame pixel
const CAPTURE_SCALE: f32 = 0.1;

#[derive(Debug)]
pub struct HeadlessView {
    size: Size,
    painted: RwLock<ThemeName>,
}

impl HeadlessView {
    pub fn new(size: Size, theme: ThemeName) -> Self {
        Self {
            size,
            painted: RwLock::new(theme),
        }
    }

    /// Theme of the last painted frame
    pub fn painted(&self) -> ThemeName {
        *self.painted.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn paint(&self, theme: ThemeName) {
        *self.painted.write().unwrap_or_else(PoisonError::into_inner) = theme;
    }

    /// Repaint after every committed theme change until the state channel
    /// closes
    pub fn spawn_renderer(
        self: &Arc<Self>,
        mut state: watch::Receiver<TransitionState>,
    ) -> JoinHandle<()> {
        let view = Arc::clone(self);
        tokio::spawn(async move {
            while state.changed().await.is_ok() {
                let theme = state.borrow_and_update().theme();
                if theme == view.painted() {
                    continue;
                }
                tokio::time::sleep(RENDER_LATENCY).await;
                view.paint(theme);
                tracing::trace!(%theme, "headless view repainted");
            }
        })
    }

    /// Rasterize the last painted frame: a background with a header bar
    pub fn rasterize(&self) -> SnapshotImage {
        let theme = self.painted();
        let (background, header) = palette(theme);
        let width = ((self.size.width * CAPTURE_SCALE).ceil() as u32).max(1);
        let height = ((self.size.height * CAPTURE_SCALE).ceil() as u32).max(1);
        let header_rows = height / 10;

        let pixels = RgbaImage::from_fn(width, height, |_, y| {
            if y < header_rows {
                header
            } else {
                background
            }
        });
        SnapshotImage::new(pixels)
    }
}

fn palette(theme: ThemeName) -> (Rgba<u8>, Rgba<u8>) {
    match theme {
        ThemeName::Light => (Rgba([248, 248, 250, 255]), Rgba([225, 228, 235, 255])),
        ThemeName::Dark => (Rgba([18, 18, 24, 255]), Rgba([40, 42, 54, 255])),
    }
}

/// Capture backend over a [`HeadlessView`]
pub struct HeadlessCapture {
    view: Arc<HeadlessView>,
    fail_after_switch: bool,
    calls: AtomicU64,
}

impl HeadlessCapture {
    pub fn new(view: Arc<HeadlessView>, fail_after_switch: bool) -> Self {
        Self {
            view,
            fail_after_switch,
            calls: AtomicU64::new(0),
        }
    }
}

impl SnapshotCapture for HeadlessCapture {
    async fn capture(&self) -> Result<SnapshotImage, CaptureError> {
        // Captures come in pairs: before the switch, then after it
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_after_switch && call % 2 == 1 {
            return Err(CaptureError::Failed("headless capture disabled".into()));
        }
        let frame = self.view.rasterize();
        tracing::debug!(
            theme = %self.view.painted(),
            width = frame.width(),
            height = frame.height(),
            "captured headless frame"
        );
        Ok(frame)
    }
}

/// Status bar that reports style changes through the log
#[derive(Debug, Default)]
pub struct LoggingStatusBar;

impl StatusBar for LoggingStatusBar {
    fn set_style(&self, style: StatusBarStyle) {
        tracing::info!(?style, "status bar style changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_shows_painted_theme() {
        let view = HeadlessView::new(Size::new(300.0, 800.0), ThemeName::Dark);
        let frame = view.rasterize();
        assert_eq!((frame.width(), frame.height()), (30, 80));
        assert_eq!(*frame.pixels().get_pixel(0, 79), palette(ThemeName::Dark).0);
        assert_eq!(*frame.pixels().get_pixel(0, 0), palette(ThemeName::Dark).1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_repaints_after_latency() {
        let view = Arc::new(HeadlessView::new(Size::new(10.0, 10.0), ThemeName::Light));
        let (tx, rx) = watch::channel(TransitionState::idle(ThemeName::Light));
        let renderer = view.spawn_renderer(rx);

        tx.send_replace(TransitionState::idle(ThemeName::Dark));
        tokio::time::sleep(RENDER_LATENCY / 2).await;
        assert_eq!(view.painted(), ThemeName::Light);

        tokio::time::sleep(RENDER_LATENCY).await;
        assert_eq!(view.painted(), ThemeName::Dark);

        drop(tx);
        renderer.await.unwrap();
    }

    #[tokio::test]
    async fn test_capture_fails_after_switch_only() {
        let view = Arc::new(HeadlessView::new(Size::new(10.0, 10.0), ThemeName::Light));
        let capture = HeadlessCapture::new(view, true);

        assert!(capture.capture().await.is_ok());
        assert!(matches!(
            capture.capture().await,
            Err(CaptureError::Failed(_))
        ));
        assert!(capture.capture().await.is_ok());
    }
}
