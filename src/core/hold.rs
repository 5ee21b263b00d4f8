//! # Hold-to-Confirm
//!
//! Press-and-hold trigger used for SOS. Progress climbs from 0 to 1 while
//! held; letting go early animates it back to 0 and nothing fires. Reaching
//! 1 while still held confirms exactly once, shows the full bar for a short
//! cooldown, then re-arms.
//!
//! ```text
//!          press                 progress == 1
//!   Idle ─────────▶ Pressing ───────────────────▶ Cooldown ──(cooldown)──▶ Idle
//!    ▲                │  ▲
//!    │       release  │  │ press (resumes from current progress)
//!    │                ▼  │
//!    └──(reset)─── Resetting
//! ```
//!
//! Time is always passed in, so the machine has no clock of its own and
//! tests can drive it with synthetic `Instant`s. The event loop calls
//! `poll()` every frame while `is_animating()`.

use std::time::{Duration, Instant};

pub const DEFAULT_HOLD: Duration = Duration::from_millis(2200);
pub const DEFAULT_RESET: Duration = Duration::from_millis(200);
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldTiming {
    /// Time to go from 0 to 1 while pressed.
    pub hold: Duration,
    /// Time to animate back to 0 after an early release (from full).
    pub reset: Duration,
    /// How long the confirmed state is shown before accepting a new press.
    pub cooldown: Duration,
}

impl Default for HoldTiming {
    fn default() -> Self {
        Self {
            hold: DEFAULT_HOLD,
            reset: DEFAULT_RESET,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEvent {
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressing { started: Instant, from: f32 },
    Resetting { started: Instant, from: f32 },
    Cooldown { until: Instant },
}

#[derive(Debug, Clone)]
pub struct HoldToConfirm {
    timing: HoldTiming,
    phase: Phase,
}

impl HoldToConfirm {
    pub fn new(timing: HoldTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
        }
    }

    pub fn timing(&self) -> HoldTiming {
        self.timing
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressing { .. })
    }

    /// True whenever progress is moving or being displayed non-zero.
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_cooling_down(&self) -> bool {
        matches!(self.phase, Phase::Cooldown { .. })
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Pressing { started, from } => {
                let gained = ratio(now.saturating_duration_since(started), self.timing.hold);
                (from + gained).min(1.0)
            }
            Phase::Resetting { started, from } => {
                // Always drains at the full-bar rate, so a small bar empties quickly.
                let lost = ratio(now.saturating_duration_since(started), self.timing.reset);
                (from - lost).max(0.0)
            }
            Phase::Cooldown { .. } => 1.0,
        }
    }

    /// Start (or resume) a press. Cancels an in-flight reset animation.
    /// Returns `false` when the press is ignored (already held, or cooling down).
    pub fn press(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Pressing {
                    started: now,
                    from: 0.0,
                };
                true
            }
            Phase::Resetting { .. } => {
                let from = self.progress(now);
                self.phase = Phase::Pressing { started: now, from };
                true
            }
            Phase::Pressing { .. } | Phase::Cooldown { .. } => false,
        }
    }

    /// End a press. If the bar filled before the release, the confirmation
    /// is returned here so it is never lost between polls.
    pub fn release(&mut self, now: Instant) -> Option<HoldEvent> {
        let event = self.poll(now);
        if let Phase::Pressing { .. } = self.phase {
            let from = self.progress(now);
            self.phase = Phase::Resetting { started: now, from };
        }
        event
    }

    /// Advance phase transitions up to `now`.
    pub fn poll(&mut self, now: Instant) -> Option<HoldEvent> {
        match self.phase {
            Phase::Pressing { started, from } => {
                if self.progress(now) >= 1.0 {
                    let filled_at = started + self.timing.hold.mul_f32((1.0 - from).max(0.0));
                    self.phase = Phase::Cooldown {
                        until: filled_at + self.timing.cooldown,
                    };
                    return Some(HoldEvent::Confirmed);
                }
                None
            }
            Phase::Resetting { .. } => {
                if self.progress(now) <= 0.0 {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Cooldown { until } => {
                if now >= until {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Idle => None,
        }
    }

    /// Drop any in-flight press or animation without firing.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}

impl Default for HoldToConfirm {
    fn default() -> Self {
        Self::new(HoldTiming::default())
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    elapsed.as_secs_f32() / total.as_secs_f32()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_full_hold_fires_exactly_once() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        assert!(hold.press(t0));

        let mut fired = 0;
        for step in 0..=30 {
            if hold.poll(t0 + ms(step * 100)).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_does_not_fire_before_threshold() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        hold.press(t0);
        assert_eq!(hold.poll(t0 + ms(2100)), None);
        assert_eq!(hold.poll(t0 + ms(2200)), Some(HoldEvent::Confirmed));
    }

    #[test]
    fn test_early_release_resets_without_firing() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        hold.press(t0);
        assert_eq!(hold.poll(t0 + ms(500)), None);
        assert_eq!(hold.release(t0 + ms(1000)), None);

        let mid = hold.progress(t0 + ms(1050));
        assert!(mid > 0.0 && mid < 0.5);

        hold.poll(t0 + ms(1300));
        assert_eq!(hold.progress(t0 + ms(1300)), 0.0);
        assert!(!hold.is_animating());

        // Nothing fires later either.
        assert_eq!(hold.poll(t0 + ms(5000)), None);
    }

    #[test]
    fn test_release_after_fill_reports_confirmation() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        hold.press(t0);
        assert_eq!(hold.release(t0 + ms(2500)), Some(HoldEvent::Confirmed));
        assert!(hold.is_cooling_down());
    }

    #[test]
    fn test_cooldown_blocks_presses_then_rearms() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        hold.press(t0);
        hold.poll(t0 + ms(2200));
        hold.release(t0 + ms(2300));

        assert_eq!(hold.progress(t0 + ms(2400)), 1.0);
        assert!(!hold.press(t0 + ms(2500)));

        hold.poll(t0 + ms(2800));
        assert!(!hold.is_animating());
        assert_eq!(hold.progress(t0 + ms(2800)), 0.0);
        assert!(hold.press(t0 + ms(2900)));
    }

    #[test]
    fn test_press_during_reset_resumes_from_current_progress() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        hold.press(t0);
        hold.release(t0 + ms(1100)); // progress 0.5

        assert!(hold.press(t0 + ms(1150)));
        let resumed = hold.progress(t0 + ms(1150));
        assert!(resumed > 0.2 && resumed < 0.5);
        assert!(hold.is_pressed());
    }

    #[test]
    fn test_second_press_while_held_is_ignored() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        assert!(hold.press(t0));
        assert!(!hold.press(t0 + ms(1000)));
        assert_eq!(hold.poll(t0 + ms(2200)), Some(HoldEvent::Confirmed));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let t0 = Instant::now();
        let mut hold = HoldToConfirm::default();
        hold.press(t0);
        hold.cancel();
        assert_eq!(hold.poll(t0 + ms(3000)), None);
        assert_eq!(hold.progress(t0 + ms(3000)), 0.0);
    }
}
