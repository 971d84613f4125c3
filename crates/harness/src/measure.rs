//! Measured regions.

use std::fmt;

use log::debug;

use crate::clock::Clock;
use crate::core::{Grid, Strategy};
use crate::engine::{run_frames, Simulation};
use crate::engine::term::Surface;

/// Elapsed ticks for one measured workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub label: String,
    pub ticks: u64,
    /// Frames or sweeps executed inside the region
    pub iterations: u32,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ticks", self.label, self.ticks)
    }
}

/// Run `workload` between `start_measurement` and `stop_measurement`.
pub fn measure<C: Clock, F: FnOnce()>(
    clock: &mut C,
    label: impl Into<String>,
    iterations: u32,
    workload: F,
) -> Measurement {
    let label = label.into();
    debug!("measuring {} ({} iterations)", label, iterations);

    clock.start_measurement();
    workload();
    let ticks = clock.stop_measurement();

    debug!("{} finished in {} ticks", label, ticks);
    Measurement {
        label,
        ticks,
        iterations,
    }
}

/// Time `frames` frames of `sim`.
pub fn measure_frames<C: Clock, S: Simulation>(
    clock: &mut C,
    sim: &mut S,
    surface: &mut Surface,
    frames: u32,
) -> Measurement {
    measure(clock, format!("frames {}", S::NAME), frames, || {
        run_frames(sim, surface, frames)
    })
}

/// Time `sweeps` read-increment-write sweeps of `grid` through `strategy`.
pub fn measure_sweeps<C: Clock>(
    clock: &mut C,
    grid: &mut Grid,
    strategy: Strategy,
    sweeps: u32,
) -> Measurement {
    measure(clock, format!("sweep {}", strategy.label()), sweeps, || {
        grid.sweep_with(strategy, sweeps)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn measure_reports_clock_ticks() {
        let mut clock = ManualClock::new(7);
        let mut ran = false;
        let m = measure(&mut clock, "noop", 1, || ran = true);
        assert!(ran);
        assert_eq!(m.ticks, 7);
        assert_eq!(m.to_string(), "noop: 7 ticks");
    }

    #[test]
    fn measure_sweeps_runs_the_workload() {
        let mut clock = ManualClock::new(1);
        let mut grid = Grid::new();
        let m = measure_sweeps(&mut clock, &mut grid, Strategy::RowPointers, 4);
        assert_eq!(m.label, "sweep row-pointers");
        assert_eq!(m.iterations, 4);
        assert!(grid.cells().iter().all(|&c| c == 4));
    }
}
