//! Transition controller
//!
//! Sequences one light/dark switch:
//!
//! 1. fix the reveal circle at the interaction point
//! 2. capture the current frame
//! 3. switch the theme and wait for the view to redraw
//! 4. capture the new frame
//! 5. grow the circle over the configured duration
//! 6. settle back to `Idle`
//!
//! State is published through a `watch` channel. The controller owns the only
//! sender; renderers and UI code only ever hold receivers.

use crate::config::TransitionConfig;
use crate::error::{CaptureError, Result, TransitionError};
use crate::host::{SnapshotCapture, Viewport};
use crate::state::{PhaseKind, TransitionEvent, TransitionState};
use dusk_animation::{AnimationDriver, ProgressReader};
use dusk_paint::{Circle, Point, SnapshotImage};
use dusk_theme::{StatusBar, ThemeName};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// The non-generic half of the controller: everything a commit touches
struct Core {
    state: watch::Sender<TransitionState>,
    status_bar: Arc<dyn StatusBar>,
    driver: AnimationDriver,
    in_flight: AtomicBool,
    history: Mutex<Vec<(PhaseKind, PhaseKind)>>,
}

impl Core {
    fn record(&self, from: PhaseKind, to: PhaseKind) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((from, to));
    }

    /// Apply `event` to the published state and notify observers
    fn dispatch(&self, event: TransitionEvent) -> Result<()> {
        let mut outcome = Ok(());
        let mut change = None;
        self.state.send_if_modified(|state| match state.apply(event) {
            Ok(next) => {
                change = Some((
                    state.kind(),
                    next.kind(),
                    next.theme(),
                    (next.status_bar_target() != state.status_bar_target())
                        .then_some(next.status_bar_target()),
                ));
                *state = next;
                true
            }
            Err(err) => {
                outcome = Err(err);
                false
            }
        });

        if let Some((from, to, theme, status_bar)) = change {
            tracing::debug!(%from, %to, %theme, "transition phase committed");
            self.record(from, to);
            if let Some(target) = status_bar {
                self.status_bar.set_style(target.into());
            }
        }
        outcome
    }

    /// Replace whatever is published with a settled state
    fn restore(&self, theme: ThemeName) {
        let previous = self.state.send_replace(TransitionState::idle(theme));
        self.driver.reset();
        if previous.kind() != PhaseKind::Idle {
            self.record(previous.kind(), PhaseKind::Idle);
        }
        if previous.status_bar_target() != theme.toggle() {
            self.status_bar.set_style(theme.toggle().into());
        }
    }
}

/// Held for the duration of one `toggle`.
///
/// Dropping it before [`InFlight::complete`] (an error path or a cancelled
/// future) puts the pre-toggle theme back in an `Idle` state.
struct InFlight<'a> {
    core: &'a Core,
    origin: ThemeName,
    completed: bool,
}

impl<'a> InFlight<'a> {
    fn acquire(core: &'a Core) -> Result<Self> {
        core.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| TransitionError::Busy)?;
        let origin = core.state.borrow().theme();
        Ok(Self {
            core,
            origin,
            completed: false,
        })
    }

    fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.completed && self.core.state.borrow().is_active() {
            tracing::warn!(theme = %self.origin, "transition aborted, restoring theme");
            self.core.restore(self.origin);
        }
        self.core.in_flight.store(false, Ordering::Release);
    }
}

/// Orchestrates theme transitions for one application root
pub struct TransitionController<C> {
    core: Core,
    capture: C,
    viewport: Arc<dyn Viewport>,
    config: TransitionConfig,
}

impl<C: SnapshotCapture> TransitionController<C> {
    pub fn new(
        capture: C,
        viewport: Arc<dyn Viewport>,
        status_bar: Arc<dyn StatusBar>,
        config: TransitionConfig,
        theme: ThemeName,
    ) -> Self {
        let initial = TransitionState::idle(theme);
        status_bar.set_style(initial.status_bar_target().into());
        let (state, _) = watch::channel(initial);

        Self {
            core: Core {
                state,
                status_bar,
                driver: AnimationDriver::new(),
                in_flight: AtomicBool::new(false),
                history: Mutex::new(Vec::new()),
            },
            capture,
            viewport,
            config,
        }
    }

    /// Snapshot of the latest committed state
    pub fn state(&self) -> TransitionState {
        self.core.state.borrow().clone()
    }

    /// Observe every committed state
    pub fn subscribe(&self) -> watch::Receiver<TransitionState> {
        self.core.state.subscribe()
    }

    /// Read-only handle to the reveal progress
    pub fn progress(&self) -> ProgressReader {
        self.core.driver.reader()
    }

    pub fn theme(&self) -> ThemeName {
        self.core.state.borrow().theme()
    }

    pub fn is_active(&self) -> bool {
        self.core.state.borrow().is_active()
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Committed `(from, to)` phase changes, oldest first
    pub fn history(&self) -> Vec<(PhaseKind, PhaseKind)> {
        self.core
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_history(&self) {
        self.core
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Switch to the other theme with a circular reveal centered at `(x, y)`.
    ///
    /// Resolves once the animation has finished and the state is `Idle` again,
    /// returning the new theme. Fails with [`TransitionError::Busy`] while
    /// another toggle is running; on any other failure the previous theme is
    /// restored before this returns.
    pub async fn toggle(&self, x: f32, y: f32) -> Result<ThemeName> {
        let guard = InFlight::acquire(&self.core).map_err(|err| {
            tracing::warn!(x, y, "toggle rejected: transition already in progress");
            err
        })?;

        let origin = Point::new(x, y);
        if !origin.is_finite() {
            return Err(TransitionError::InvalidOrigin { x, y });
        }
        let viewport = self
            .viewport
            .size()
            .filter(|size| size.is_usable())
            .ok_or(TransitionError::GeometryUnavailable)?;
        let circle = Circle::covering(origin, viewport);
        // Finite points far enough away overflow the radius
        if !circle.radius.is_finite() {
            return Err(TransitionError::InvalidOrigin { x, y });
        }
        tracing::debug!(x, y, radius = circle.radius, "starting theme transition");

        self.core.driver.reset();
        self.core.dispatch(TransitionEvent::Toggle { circle })?;

        let before = self.capture_frame("before").await?;
        self.core.dispatch(TransitionEvent::BeforeCaptured(before))?;
        self.core.dispatch(TransitionEvent::ThemeFlipped)?;

        tokio::time::sleep(self.config.settle_delay()).await;

        let after = self.capture_frame("after").await?;
        self.core.dispatch(TransitionEvent::AfterCaptured(after))?;

        let timing = self.config.timing();
        self.core.driver.start(timing);
        self.core.dispatch(TransitionEvent::AnimationStarted)?;

        tokio::time::sleep(timing.duration()).await;
        self.core.dispatch(TransitionEvent::AnimationFinished)?;

        guard.complete();
        let theme = self.theme();
        tracing::debug!(%theme, "theme transition finished");
        Ok(theme)
    }

    async fn capture_frame(&self, which: &'static str) -> Result<SnapshotImage> {
        let timeout = self.config.capture_timeout();
        let result = match tokio::time::timeout(timeout, self.capture.capture()).await {
            Ok(result) => result,
            Err(_) => Err(CaptureError::Timeout(timeout)),
        };
        result.map_err(|err| {
            tracing::warn!(frame = which, error = %err, "snapshot capture failed");
            TransitionError::Capture(err)
        })
    }
}
