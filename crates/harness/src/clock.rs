//! Clock collaborator.
//!
//! A measured region is bracketed by [`Clock::start_measurement`] and
//! [`Clock::stop_measurement`]; the elapsed count is reported in ticks whose
//! length depends on the clock.

use std::time::{Duration, Instant};

use log::warn;

pub trait Clock {
    /// Reset the elapsed-tick counter.
    fn start_measurement(&mut self);

    /// Ticks elapsed since the last [`Clock::start_measurement`].
    fn stop_measurement(&mut self) -> u64;
}

/// Monotonic wall clock with a configurable tick length.
#[derive(Debug, Clone)]
pub struct InstantClock {
    tick: Duration,
    started: Option<Instant>,
}

impl InstantClock {
    /// Ticks shorter than a nanosecond are rounded up to one nanosecond.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_nanos(1)),
            started: None,
        }
    }

    pub fn from_nanos(tick_ns: u64) -> Self {
        Self::new(Duration::from_nanos(tick_ns))
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new(Duration::from_micros(1))
    }
}

impl Clock for InstantClock {
    fn start_measurement(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop_measurement(&mut self) -> u64 {
        match self.started.take() {
            Some(start) => (start.elapsed().as_nanos() / self.tick.as_nanos()) as u64,
            None => {
                warn!("stop_measurement called without start_measurement");
                0
            }
        }
    }
}

/// Deterministic clock: every measured region lasts `step` ticks plus whatever
/// was added with [`ManualClock::advance`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    step: u64,
    now: u64,
    started: u64,
}

impl ManualClock {
    pub fn new(step: u64) -> Self {
        Self {
            step,
            now: 0,
            started: 0,
        }
    }

    pub fn advance(&mut self, ticks: u64) {
        self.now = self.now.saturating_add(ticks);
    }

    pub fn now(&self) -> u64 {
        self.now
    }
}

impl Clock for ManualClock {
    fn start_measurement(&mut self) {
        self.started = self.now;
    }

    fn stop_measurement(&mut self) -> u64 {
        self.advance(self.step);
        self.now - self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_counts_steps_and_advances() {
        let mut clock = ManualClock::new(5);
        clock.start_measurement();
        clock.advance(10);
        assert_eq!(clock.stop_measurement(), 15);

        clock.start_measurement();
        assert_eq!(clock.stop_measurement(), 5);
        assert_eq!(clock.now(), 20);
    }

    #[test]
    fn instant_clock_is_monotonic() {
        let mut clock = InstantClock::from_nanos(0);
        assert_eq!(clock.tick(), Duration::from_nanos(1));
        assert_eq!(clock.stop_measurement(), 0);

        clock.start_measurement();
        std::thread::sleep(Duration::from_millis(1));
        assert!(clock.stop_measurement() >= 1_000_000);
    }
}
