//! tile-sim (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the driver, integration
//! tests and benches can use `tile_sim::{core,engine,harness,term,types}`.

pub use tile_sim_core as core;
pub use tile_sim_engine as engine;
pub use tile_sim_harness as harness;
pub use tile_sim_term as term;
pub use tile_sim_types as types;
