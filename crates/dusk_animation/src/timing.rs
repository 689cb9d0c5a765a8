//! Fixed-duration timing curves

use crate::easing::Easing;
use std::time::Duration;

/// A fixed-duration run from 0.0 to 1.0 shaped by an easing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    duration: Duration,
    easing: Easing,
}

impl Timing {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn from_ms(duration_ms: u64, easing: Easing) -> Self {
        Self::new(Duration::from_millis(duration_ms), easing)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Progress after `elapsed`. Exactly 1.0 from `duration` onwards.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return 1.0;
        }
        let linear = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(linear as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
