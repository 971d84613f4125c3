//! Frame loops.
//!
//! Three engines run the same frame (damage each enemy, draw every entity) over
//! different layouts and access paths, all behind [`Simulation`]:
//!
//! | Engine | Storage | Index passing | Drawing |
//! |--------|---------|---------------|---------|
//! | [`SoaEngine`] | structure-of-arrays | explicit argument | lookup tables |
//! | [`CursorEngine`] | structure-of-arrays | scoped cursor | lookup tables |
//! | [`AosEngine`] | array-of-structs | explicit argument | arithmetic |
//!
//! After the same number of frames every engine leaves the surface byte-for-byte
//! identical.
//!
//! # Example
//!
//! ```
//! use tile_sim_engine::{run_frames, Simulation, SoaEngine};
//! use tile_sim_term::Surface;
//!
//! let mut surface = Surface::new(40, 24);
//! let mut engine = SoaEngine::new(&surface).unwrap();
//! run_frames(&mut engine, &mut surface, 10);
//! assert_eq!(surface.row_text(9).trim_end(), "e89  e89");
//! ```

pub mod aos;
pub mod cursor;
pub mod simulation;
pub mod soa;

pub use tile_sim_core as core;
pub use tile_sim_term as term;
pub use tile_sim_types as types;

pub use aos::AosEngine;
pub use cursor::CursorEngine;
pub use simulation::{run_frames, Layout, Simulation};
pub use soa::SoaEngine;
