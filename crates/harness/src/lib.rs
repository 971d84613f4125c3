//! Benchmark harness: the clock collaborator, measured regions, reporting and
//! run configuration.
//!
//! Logging happens on either side of a measured region, never inside it.

pub mod clock;
pub mod config;
pub mod measure;
pub mod report;

pub use tile_sim_core as core;
pub use tile_sim_engine as engine;
pub use tile_sim_types as types;

pub use clock::{Clock, InstantClock, ManualClock};
pub use config::{Mode, RunConfig};
pub use measure::{measure, measure_frames, measure_sweeps, Measurement};
pub use report::Report;
