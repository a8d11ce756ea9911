//! Fade-to-white gate used between two scenes.
//!
//! The fade is stepped by the frame loop instead of owning timers, so a
//! cover can never overlap another cover: `cover` on a busy fade is refused.

use crate::constants::{FADE_COVER, FADE_REVEAL};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTiming {
    pub cover: Duration,
    pub reveal: Duration,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            cover: FADE_COVER,
            reveal: FADE_REVEAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    Covering { elapsed: Duration },
    Revealing { elapsed: Duration },
}

/// Completion reported by [`Fade::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeEvent {
    /// Screen is fully white; safe to swap scenes.
    Covered,
    /// Veil lifted; the transition is over.
    Revealed,
}

#[derive(Clone, Debug)]
pub struct Fade {
    timing: FadeTiming,
    phase: FadePhase,
}

impl Fade {
    pub fn new(timing: FadeTiming) -> Self {
        Self {
            timing,
            phase: FadePhase::Idle,
        }
    }

    #[inline]
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == FadePhase::Idle
    }

    pub fn timing(&self) -> FadeTiming {
        self.timing
    }

    /// Start fading to white. Returns false if a fade is already running.
    pub fn cover(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = FadePhase::Covering {
            elapsed: Duration::ZERO,
        };
        true
    }

    /// Start fading back in; the sequencer calls this right after `Covered`.
    /// Refused while another phase runs.
    pub fn reveal(&mut self) -> bool {
        if self.phase != FadePhase::Idle {
            return false;
        }
        self.phase = FadePhase::Revealing {
            elapsed: Duration::ZERO,
        };
        true
    }

    /// Advance by `dt`. When a phase completes, returns the event plus the
    /// part of `dt` not consumed by that phase. Call again with the
    /// leftover to keep going.
    pub fn step(&mut self, dt: Duration) -> Option<(FadeEvent, Duration)> {
        match self.phase {
            FadePhase::Idle => None,
            FadePhase::Covering { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.timing.cover {
                    self.phase = FadePhase::Idle;
                    Some((FadeEvent::Covered, elapsed - self.timing.cover))
                } else {
                    self.phase = FadePhase::Covering { elapsed };
                    None
                }
            }
            FadePhase::Revealing { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.timing.reveal {
                    self.phase = FadePhase::Idle;
                    Some((FadeEvent::Revealed, elapsed - self.timing.reveal))
                } else {
                    self.phase = FadePhase::Revealing { elapsed };
                    None
                }
            }
        }
    }

    /// Veil amount in [0, 1].
    pub fn opacity(&self) -> f32 {
        fn ratio(elapsed: Duration, total: Duration) -> f32 {
            if total.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
        match self.phase {
            FadePhase::Idle => 0.0,
            FadePhase::Covering { elapsed } => ratio(elapsed, self.timing.cover),
            FadePhase::Revealing { elapsed } => 1.0 - ratio(elapsed, self.timing.reveal),
        }
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(FadeTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_completes_after_its_duration_with_leftover() {
        let mut fade = Fade::default();
        assert!(fade.cover());
        assert_eq!(fade.step(Duration::from_millis(500)), None);
        assert!(fade.opacity() > 0.5 && fade.opacity() < 1.0);
        assert_eq!(
            fade.step(Duration::from_millis(400)),
            Some((FadeEvent::Covered, Duration::from_millis(100)))
        );
        assert!(fade.is_idle());
    }

    #[test]
    fn busy_fade_refuses_a_second_cover() {
        let mut fade = Fade::default();
        assert!(fade.cover());
        assert!(!fade.cover());
        assert!(!fade.reveal());
    }

    #[test]
    fn reveal_ramps_the_veil_down() {
        let mut fade = Fade::default();
        assert!(fade.reveal());
        assert!((fade.opacity() - 1.0).abs() < 1e-6);
        assert_eq!(
            fade.step(FADE_REVEAL),
            Some((FadeEvent::Revealed, Duration::ZERO))
        );
        assert_eq!(fade.opacity(), 0.0);
    }
}
