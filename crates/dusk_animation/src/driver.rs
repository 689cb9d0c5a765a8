//! Animation driver
//!
//! A progress value that animates 0.0 → 1.0 along a [`Timing`]. The driver is
//! the only writer; renderers hold [`ProgressReader`]s which can sample the
//! value at any time without awaiting anything.
//!
//! Progress is derived from the clock rather than accumulated per frame, so
//! any frame source (vsync, a tokio interval, a test advancing paused time)
//! observes the same curve.

use crate::timing::Timing;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::time::Instant;

#[derive(Clone, Copy, Debug)]
enum Run {
    /// Not animating; holds the last settled value
    Resting(f32),
    Running { started: Instant, timing: Timing },
}

impl Run {
    fn sample(&self, now: Instant) -> f32 {
        match self {
            Run::Resting(value) => *value,
            Run::Running { started, timing } => {
                timing.progress_at(now.saturating_duration_since(*started))
            }
        }
    }

    fn is_running(&self, now: Instant) -> bool {
        match self {
            Run::Resting(_) => false,
            Run::Running { started, timing } => {
                !timing.is_finished(now.saturating_duration_since(*started))
            }
        }
    }
}

fn load(run: &RwLock<Run>) -> Run {
    *run.read().unwrap_or_else(PoisonError::into_inner)
}

/// Writer side of a shared progress value
#[derive(Debug)]
pub struct AnimationDriver {
    run: Arc<RwLock<Run>>,
}

impl AnimationDriver {
    /// Create a driver resting at 0.0
    pub fn new() -> Self {
        Self {
            run: Arc::new(RwLock::new(Run::Resting(0.0))),
        }
    }

    /// Start a new run from 0.0. Any run in progress is superseded.
    pub fn start(&self, timing: Timing) {
        self.start_at(timing, Instant::now());
    }

    /// Start a new run as if it began at `started`
    pub fn start_at(&self, timing: Timing, started: Instant) {
        tracing::trace!(
            duration_ms = timing.duration().as_millis() as u64,
            easing = ?timing.easing(),
            "animation driver started"
        );
        *self.run.write().unwrap_or_else(PoisonError::into_inner) =
            Run::Running { started, timing };
    }

    /// Stop and rest at 0.0
    pub fn reset(&self) {
        *self.run.write().unwrap_or_else(PoisonError::into_inner) = Run::Resting(0.0);
    }

    /// Current progress
    pub fn progress(&self) -> f32 {
        load(&self.run).sample(Instant::now())
    }

    /// Whether a run is in progress and has not reached 1.0
    pub fn is_running(&self) -> bool {
        load(&self.run).is_running(Instant::now())
    }

    /// A read-only handle to this driver's progress
    pub fn reader(&self) -> ProgressReader {
        ProgressReader {
            run: Arc::clone(&self.run),
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of an [`AnimationDriver`]'s progress
#[derive(Clone, Debug)]
pub struct ProgressReader {
    run: Arc<RwLock<Run>>,
}

impl ProgressReader {
    /// Current progress in [0, 1]
    pub fn get(&self) -> f32 {
        self.get_at(Instant::now())
    }

    /// Progress as of `now`
    pub fn get_at(&self, now: Instant) -> f32 {
        load(&self.run).sample(now)
    }

    pub fn is_running(&self) -> bool {
        load(&self.run).is_running(Instant::now())
    }
}
