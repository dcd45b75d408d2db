use std::time::Duration;

use bevy::prelude::*;

use crate::resources::time_rate::TimeRate;

/// A repeating step driven by frame time.
///
/// The first step is due on the first poll, after which the loop waits one
/// rate interval between steps. When a step comes due while the loop is not
/// allowed to run, the loop ends for good.
#[derive(Debug, Clone)]
pub struct PeriodicLoop {
    timer: Timer,
    rate: TimeRate,
    first_step_pending: bool,
    stopped: bool,
}

impl PeriodicLoop {
    pub fn new(rate: TimeRate) -> Self {
        Self {
            timer: Timer::new(rate.interval(), TimerMode::Repeating),
            rate,
            first_step_pending: true,
            stopped: false,
        }
    }

    pub fn rate(&self) -> TimeRate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: TimeRate) {
        if rate != self.rate {
            self.rate = rate;
            self.timer.set_duration(rate.interval());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advances the wait by `delta` and returns how many steps are due.
    pub fn poll(&mut self, delta: Duration, should_run: bool) -> u32 {
        if self.stopped {
            return 0;
        }

        let due = if self.first_step_pending {
            self.first_step_pending = false;
            1
        } else {
            self.timer.tick(delta);
            self.timer.times_finished_this_tick()
        };

        if due > 0 && !should_run {
            self.stopped = true;
            return 0;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_step_is_immediate() {
        let mut lp = PeriodicLoop::new(TimeRate::Fps10);
        assert_eq!(lp.poll(Duration::ZERO, true), 1);
        assert_eq!(lp.poll(ms(50), true), 0);
        assert_eq!(lp.poll(ms(50), true), 1);
    }

    #[test]
    fn test_catches_up_on_long_frames() {
        let mut lp = PeriodicLoop::new(TimeRate::Fps10);
        lp.poll(Duration::ZERO, true);
        assert_eq!(lp.poll(ms(350), true), 3);
        // Leftover 50ms carries into the next wait.
        assert_eq!(lp.poll(ms(50), true), 1);
    }

    #[test]
    fn test_stops_at_next_due_step() {
        let mut lp = PeriodicLoop::new(TimeRate::Fps10);
        lp.poll(Duration::ZERO, true);

        // Flag cleared mid-wait: nothing happens until the wait completes.
        assert_eq!(lp.poll(ms(50), false), 0);
        assert!(!lp.is_stopped());

        assert_eq!(lp.poll(ms(50), false), 0);
        assert!(lp.is_stopped());

        // Setting the flag again does not restart the loop.
        assert_eq!(lp.poll(ms(500), true), 0);
    }

    #[test]
    fn test_disabled_from_the_start() {
        let mut lp = PeriodicLoop::new(TimeRate::Fps30);
        assert_eq!(lp.poll(Duration::ZERO, false), 0);
        assert!(lp.is_stopped());
    }

    #[test]
    fn test_set_rate() {
        let mut lp = PeriodicLoop::new(TimeRate::Fps1);
        lp.poll(Duration::ZERO, true);
        lp.set_rate(TimeRate::Fps10);
        assert_eq!(lp.rate(), TimeRate::Fps10);
        assert_eq!(lp.poll(ms(200), true), 2);
    }
}
