//! # Safety Check-in
//!
//! Countdown-to-escalation. The user picks a duration and a trusted
//! contact; if they have not marked themselves safe when the countdown
//! reaches zero, the contact is alerted exactly once.
//!
//! Two layers:
//! - [`Countdown`]: pure second-by-second state machine.
//! - [`CheckInTimer`]: a tokio task ticking a `Countdown` once per second
//!   and reporting [`TimerEvent`]s to the event loop over a channel. The
//!   task is aborted when the handle is dropped, so a torn-down screen
//!   never receives a late escalation.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::AbortHandle;
use tokio::time::{Instant, interval_at};

use crate::core::model::TrustedContact;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Expired,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    Escalate,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_secs: u64,
    state: CountdownState,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining_secs: duration.as_secs(),
            state: CountdownState::Running,
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::from_secs(u64::from(minutes) * 60))
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// One second elapses. Returns `Escalate` on the tick that reaches zero.
    pub fn tick(&mut self) -> Option<CountdownEvent> {
        if self.state != CountdownState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = CountdownState::Expired;
            return Some(CountdownEvent::Escalate);
        }
        None
    }

    /// Stop without escalating. No effect once expired.
    pub fn mark_safe(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Cancelled;
        }
    }
}

/// Messages from a running check-in task to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    Tick { remaining_secs: u64 },
    Escalate { contact: TrustedContact },
}

/// Owning handle for a running check-in. Dropping it cancels the countdown.
#[derive(Debug)]
pub struct CheckInTimer {
    abort: AbortHandle,
    contact: TrustedContact,
    total_secs: u64,
}

impl CheckInTimer {
    /// Spawn the countdown task. Must be called from within a tokio runtime.
    pub fn start(
        duration: Duration,
        contact: TrustedContact,
        tx: mpsc::Sender<TimerEvent>,
    ) -> Self {
        let total_secs = duration.as_secs();
        info!(
            "Check-in started: {}s, escalates to contact {}",
            total_secs, contact.id
        );
        let task_contact = contact.clone();
        let handle = tokio::spawn(async move {
            let mut countdown = Countdown::new(duration);
            let mut ticker = interval_at(Instant::now() + TICK, TICK);
            loop {
                ticker.tick().await;
                let event = match countdown.tick() {
                    Some(CountdownEvent::Escalate) => TimerEvent::Escalate {
                        contact: task_contact.clone(),
                    },
                    None => TimerEvent::Tick {
                        remaining_secs: countdown.remaining_secs(),
                    },
                };
                let escalating = matches!(event, TimerEvent::Escalate { .. });
                if tx.send(event).is_err() {
                    warn!("Check-in receiver dropped, stopping countdown");
                    return;
                }
                if escalating {
                    info!("Check-in expired, escalation sent");
                    return;
                }
            }
        });
        Self {
            abort: handle.abort_handle(),
            contact,
            total_secs,
        }
    }

    pub fn from_minutes(
        minutes: u32,
        contact: TrustedContact,
        tx: mpsc::Sender<TimerEvent>,
    ) -> Self {
        Self::start(Duration::from_secs(u64::from(minutes) * 60), contact, tx)
    }

    pub fn contact(&self) -> &TrustedContact {
        &self.contact
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }

    /// Stop the countdown without escalating.
    pub fn mark_safe(self) {
        info!("Check-in marked safe");
        self.abort.abort();
    }
}

impl Drop for CheckInTimer {
    fn drop(&mut self) {
        debug!("Check-in handle released");
        self.abort.abort();
    }
}

/// `MM:SS`, or `H:MM:SS` past an hour.
pub fn format_remaining(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_escalates_once_at_zero() {
        let mut countdown = Countdown::new(Duration::from_secs(3));
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), Some(CountdownEvent::Escalate));
        assert_eq!(countdown.state(), CountdownState::Expired);
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn test_mark_safe_stops_without_escalation() {
        let mut countdown = Countdown::from_minutes(1);
        countdown.tick();
        countdown.mark_safe();
        assert_eq!(countdown.state(), CountdownState::Cancelled);
        for _ in 0..120 {
            assert_eq!(countdown.tick(), None);
        }
        assert_eq!(countdown.remaining_secs(), 59);
    }

    #[test]
    fn test_mark_safe_after_expiry_keeps_expired() {
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.tick();
        countdown.mark_safe();
        assert_eq!(countdown.state(), CountdownState::Expired);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(300), "05:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(3725), "1:02:05");
    }

    fn contact() -> TrustedContact {
        TrustedContact {
            id: "c1".into(),
            name: "Jane".into(),
            phone: "123".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_then_escalates() {
        let (tx, rx) = mpsc::channel();
        let _timer = CheckInTimer::start(Duration::from_secs(3), contact(), tx);

        tokio::time::sleep(Duration::from_millis(3500)).await;

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick { remaining_secs: 2 },
                TimerEvent::Tick { remaining_secs: 1 },
                TimerEvent::Escalate { contact: contact() },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_mark_safe_aborts_task() {
        let (tx, rx) = mpsc::channel();
        let timer = CheckInTimer::start(Duration::from_secs(5), contact(), tx);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        timer.mark_safe();
        tokio::time::sleep(Duration::from_secs(10)).await;

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(e, TimerEvent::Tick { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let (tx, rx) = mpsc::channel();
        {
            let _timer = CheckInTimer::start(Duration::from_secs(2), contact(), tx);
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
