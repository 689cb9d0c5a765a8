//! Transition state machine
//!
//! `Idle → AwaitingBefore → BeforeCaptured → AwaitingAfter → AfterCaptured → Animating → Idle`
//!
//! [`TransitionState::apply`] is the only way forward: it builds the complete
//! next state from the current one plus an event. Each phase carries exactly
//! the data that exists at that point, so a frame "after" without a frame
//! "before" cannot be expressed.

use crate::error::{Result, TransitionError};
use dusk_paint::{Circle, SnapshotImage};
use dusk_theme::ThemeName;
use std::fmt;

/// Where a transition is, with the data it has gathered so far
#[derive(Clone, Debug)]
pub enum Phase {
    Idle,
    AwaitingBefore {
        circle: Circle,
    },
    BeforeCaptured {
        circle: Circle,
        before: SnapshotImage,
    },
    AwaitingAfter {
        circle: Circle,
        before: SnapshotImage,
    },
    AfterCaptured {
        circle: Circle,
        before: SnapshotImage,
        after: SnapshotImage,
    },
    Animating {
        circle: Circle,
        before: SnapshotImage,
        after: SnapshotImage,
    },
}

/// Data-free tag of a [`Phase`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Idle,
    AwaitingBefore,
    BeforeCaptured,
    AwaitingAfter,
    AfterCaptured,
    Animating,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Idle => "idle",
            PhaseKind::AwaitingBefore => "awaiting-before",
            PhaseKind::BeforeCaptured => "before-captured",
            PhaseKind::AwaitingAfter => "awaiting-after",
            PhaseKind::AfterCaptured => "after-captured",
            PhaseKind::Animating => "animating",
        };
        f.write_str(name)
    }
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::AwaitingBefore { .. } => PhaseKind::AwaitingBefore,
            Phase::BeforeCaptured { .. } => PhaseKind::BeforeCaptured,
            Phase::AwaitingAfter { .. } => PhaseKind::AwaitingAfter,
            Phase::AfterCaptured { .. } => PhaseKind::AfterCaptured,
            Phase::Animating { .. } => PhaseKind::Animating,
        }
    }
}

/// Inputs that move a transition forward
#[derive(Clone, Debug)]
pub enum TransitionEvent {
    /// The user asked for the other theme; the reveal circle is fixed here
    Toggle { circle: Circle },
    /// The frame under the old theme is available
    BeforeCaptured(SnapshotImage),
    /// The application switched to the new theme
    ThemeFlipped,
    /// The frame under the new theme is available
    AfterCaptured(SnapshotImage),
    /// The reveal animation has been started from 0
    AnimationStarted,
    /// The reveal animation ran its full duration
    AnimationFinished,
}

impl TransitionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TransitionEvent::Toggle { .. } => "toggle",
            TransitionEvent::BeforeCaptured(_) => "before-captured",
            TransitionEvent::ThemeFlipped => "theme-flipped",
            TransitionEvent::AfterCaptured(_) => "after-captured",
            TransitionEvent::AnimationStarted => "animation-started",
            TransitionEvent::AnimationFinished => "animation-finished",
        }
    }
}

/// The single source of truth read by the UI and the overlay renderer
#[derive(Clone, Debug)]
pub struct TransitionState {
    theme: ThemeName,
    status_bar_target: ThemeName,
    phase: Phase,
}

impl TransitionState {
    /// A settled state showing `theme`. The status bar target is the opposite
    /// scheme, matching the steady-state convention of the host status bar.
    pub fn idle(theme: ThemeName) -> Self {
        Self {
            theme,
            status_bar_target: theme.toggle(),
            phase: Phase::Idle,
        }
    }

    /// Theme the application should render with
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn status_bar_target(&self) -> ThemeName {
        self.status_bar_target
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// True from the toggle until the animation's terminal commit
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The reveal circle at full radius
    pub fn circle(&self) -> Option<Circle> {
        match &self.phase {
            Phase::Idle => None,
            Phase::AwaitingBefore { circle }
            | Phase::BeforeCaptured { circle, .. }
            | Phase::AwaitingAfter { circle, .. }
            | Phase::AfterCaptured { circle, .. }
            | Phase::Animating { circle, .. } => Some(*circle),
        }
    }

    pub fn image_before(&self) -> Option<&SnapshotImage> {
        match &self.phase {
            Phase::Idle | Phase::AwaitingBefore { .. } => None,
            Phase::BeforeCaptured { before, .. }
            | Phase::AwaitingAfter { before, .. }
            | Phase::AfterCaptured { before, .. }
            | Phase::Animating { before, .. } => Some(before),
        }
    }

    pub fn image_after(&self) -> Option<&SnapshotImage> {
        match &self.phase {
            Phase::AfterCaptured { after, .. } | Phase::Animating { after, .. } => Some(after),
            _ => None,
        }
    }

    /// Compute the state that follows `event`
    pub fn apply(&self, event: TransitionEvent) -> Result<TransitionState> {
        let next = match (&self.phase, event) {
            (Phase::Idle, TransitionEvent::Toggle { circle }) => TransitionState {
                theme: self.theme,
                status_bar_target: self.theme.toggle(),
                phase: Phase::AwaitingBefore { circle },
            },
            (Phase::AwaitingBefore { circle }, TransitionEvent::BeforeCaptured(before)) => {
                TransitionState {
                    theme: self.theme,
                    status_bar_target: self.status_bar_target,
                    phase: Phase::BeforeCaptured {
                        circle: *circle,
                        before,
                    },
                }
            }
            (Phase::BeforeCaptured { circle, before }, TransitionEvent::ThemeFlipped) => {
                let theme = self.theme.toggle();
                TransitionState {
                    theme,
                    status_bar_target: theme,
                    phase: Phase::AwaitingAfter {
                        circle: *circle,
                        before: before.clone(),
                    },
                }
            }
            (Phase::AwaitingAfter { circle, before }, TransitionEvent::AfterCaptured(after)) => {
                TransitionState {
                    theme: self.theme,
                    status_bar_target: self.status_bar_target,
                    phase: Phase::AfterCaptured {
                        circle: *circle,
                        before: before.clone(),
                        after,
                    },
                }
            }
            (
                Phase::AfterCaptured {
                    circle,
                    before,
                    after,
                },
                TransitionEvent::AnimationStarted,
            ) => TransitionState {
                theme: self.theme,
                status_bar_target: self.status_bar_target,
                phase: Phase::Animating {
                    circle: *circle,
                    before: before.clone(),
                    after: after.clone(),
                },
            },
            // Frames are released here. The status bar target goes back to
            // the scheme opposite the theme, as in `idle`.
            (Phase::Animating { .. }, TransitionEvent::AnimationFinished) => {
                TransitionState::idle(self.theme)
            }
            (_, event) => {
                return Err(TransitionError::UnexpectedEvent {
                    phase: self.kind(),
                    event: event.name(),
                })
            }
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk_paint::Point;

    fn circle() -> Circle {
        Circle::new(Point::new(10.0, 20.0), 100.0)
    }

    fn frame(shade: u8) -> SnapshotImage {
        SnapshotImage::solid(2, 2, [shade, shade, shade, 255])
    }

    #[test]
    fn test_full_cycle() {
        let idle = TransitionState::idle(ThemeName::Light);
        assert!(!idle.is_active());
        assert_eq!(idle.status_bar_target(), ThemeName::Dark);

        let awaiting = idle
            .apply(TransitionEvent::Toggle { circle: circle() })
            .unwrap();
        assert_eq!(awaiting.kind(), PhaseKind::AwaitingBefore);
        assert_eq!(awaiting.theme(), ThemeName::Light);
        assert_eq!(awaiting.status_bar_target(), ThemeName::Dark);
        assert!(awaiting.is_active());
        assert!(awaiting.image_before().is_none());

        let before = frame(255);
        let captured = awaiting
            .apply(TransitionEvent::BeforeCaptured(before.clone()))
            .unwrap();
        assert_eq!(captured.theme(), ThemeName::Light);
        assert!(captured.image_before().unwrap().ptr_eq(&before));

        let flipped = captured.apply(TransitionEvent::ThemeFlipped).unwrap();
        assert_eq!(flipped.kind(), PhaseKind::AwaitingAfter);
        assert_eq!(flipped.theme(), ThemeName::Dark);
        assert_eq!(flipped.status_bar_target(), ThemeName::Dark);
        assert!(flipped.image_after().is_none());

        let after = frame(0);
        let ready = flipped
            .apply(TransitionEvent::AfterCaptured(after.clone()))
            .unwrap();
        assert!(ready.image_after().unwrap().ptr_eq(&after));
        assert!(ready.image_before().unwrap().ptr_eq(&before));

        let animating = ready.apply(TransitionEvent::AnimationStarted).unwrap();
        assert_eq!(animating.kind(), PhaseKind::Animating);
        assert_eq!(animating.circle(), Some(circle()));

        let done = animating.apply(TransitionEvent::AnimationFinished).unwrap();
        assert!(!done.is_active());
        assert_eq!(done.theme(), ThemeName::Dark);
        assert_eq!(done.status_bar_target(), ThemeName::Light);
        assert!(done.image_before().is_none());
        assert!(done.image_after().is_none());
        assert!(done.circle().is_none());
    }

    #[test]
    fn test_out_of_order_event_rejected() {
        let idle = TransitionState::idle(ThemeName::Dark);
        let err = idle
            .apply(TransitionEvent::AfterCaptured(frame(0)))
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::UnexpectedEvent {
                phase: PhaseKind::Idle,
                event: "after-captured",
            }
        );
    }

    #[test]
    fn test_toggle_while_active_rejected() {
        let awaiting = TransitionState::idle(ThemeName::Light)
            .apply(TransitionEvent::Toggle { circle: circle() })
            .unwrap();
        assert!(awaiting
            .apply(TransitionEvent::Toggle { circle: circle() })
            .is_err());
    }

    #[test]
    fn test_theme_flip_requires_before_frame() {
        let awaiting = TransitionState::idle(ThemeName::Light)
            .apply(TransitionEvent::Toggle { circle: circle() })
            .unwrap();
        assert!(awaiting.apply(TransitionEvent::ThemeFlipped).is_err());
    }
}
