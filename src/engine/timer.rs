use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::utils::app_time::{AppInstant, until};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Polling { next_due: AppInstant },
}

/// Repeating refresh timer driven by the frame loop.
///
/// There is no background task: the owner calls [`RefreshTimer::poll_due`]
/// every frame and issues a fetch whenever it returns true.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    name: &'static str,
    period: Duration,
    state: TimerState,
}

impl RefreshTimer {
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            state: TimerState::Idle,
        }
    }

    /// Idle -> Polling. A timer that is already polling is cancelled first
    /// and restarted from `now`.
    pub fn start(&mut self, now: AppInstant) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_timer_events {
            if self.is_polling() {
                log::info!("⏱ {} timer restarted", self.name);
            } else {
                log::info!("⏱ {} timer started ({:?})", self.name, self.period);
            }
        }

        self.state = TimerState::Polling {
            next_due: now + self.period,
        };
    }

    /// Polling -> Idle. Returns whether the timer was running.
    pub fn stop(&mut self) -> bool {
        let was_polling = self.is_polling();
        self.state = TimerState::Idle;

        #[cfg(debug_assertions)]
        if was_polling && DEBUG_FLAGS.print_timer_events {
            log::info!("⏱ {} timer stopped", self.name);
        }

        was_polling
    }

    pub fn is_polling(&self) -> bool {
        matches!(self.state, TimerState::Polling { .. })
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// True once per elapsed period; the next deadline is set from `now`.
    pub fn poll_due(&mut self, now: AppInstant) -> bool {
        match self.state {
            TimerState::Polling { next_due } if now >= next_due => {
                self.state = TimerState::Polling {
                    next_due: now + self.period,
                };
                true
            }
            _ => false,
        }
    }

    /// Time until the next tick, `None` while idle.
    pub fn until_due(&self, now: AppInstant) -> Option<Duration> {
        match self.state {
            TimerState::Polling { next_due } => Some(until(next_due, now)),
            TimerState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    const PERIOD: Duration = Duration::from_secs(60);

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = RefreshTimer::new("test", PERIOD);
        let t0 = now();
        assert!(!timer.poll_due(t0 + PERIOD * 5));
        assert_eq!(timer.until_due(t0), None);
    }

    #[test]
    fn fires_once_per_period() {
        let mut timer = RefreshTimer::new("test", PERIOD);
        let t0 = now();
        timer.start(t0);

        assert!(!timer.poll_due(t0 + Duration::from_secs(59)));
        assert!(timer.poll_due(t0 + PERIOD));
        assert!(!timer.poll_due(t0 + PERIOD + Duration::from_secs(1)));
        assert!(timer.poll_due(t0 + PERIOD * 2));
    }

    #[test]
    fn restart_replaces_running_deadline() {
        let mut timer = RefreshTimer::new("test", PERIOD);
        let t0 = now();
        timer.start(t0);
        timer.start(t0 + Duration::from_secs(30));

        assert!(timer.is_polling());
        assert!(!timer.poll_due(t0 + PERIOD), "old deadline was cancelled");
        assert!(timer.poll_due(t0 + Duration::from_secs(90)));
    }

    #[test]
    fn stop_returns_to_idle() {
        let mut timer = RefreshTimer::new("test", PERIOD);
        let t0 = now();
        timer.start(t0);
        assert!(timer.stop());
        assert!(!timer.stop());
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(!timer.poll_due(t0 + PERIOD));
    }

    #[test]
    fn until_due_counts_down_and_saturates() {
        let mut timer = RefreshTimer::new("test", PERIOD);
        let t0 = now();
        timer.start(t0);
        assert_eq!(timer.until_due(t0 + Duration::from_secs(45)), Some(Duration::from_secs(15)));
        assert_eq!(timer.until_due(t0 + PERIOD * 3), Some(Duration::ZERO));
    }
}
