//! Simulation core - entity state and the benchmark grid
//!
//! Pure data and update rules with no rendering or I/O:
//!
//! - [`entities`]: structure-of-arrays entity store with the per-frame health decay
//! - [`records`]: the array-of-structs baseline with the same rules
//! - [`grid`]: the flat 20x12 benchmark map and its compile-time row-offset table
//! - [`access`]: the three interchangeable grid indexing strategies
//!
//! # Example
//!
//! ```
//! use tile_sim_core::{EntityStore, Grid, Strategy};
//! use tile_sim_types::EntityIndex;
//!
//! let mut store = EntityStore::new();
//! let first = EntityIndex::new(0).unwrap();
//! store.tick(first);
//! assert_eq!(store.health(first), 98);
//!
//! let mut grid = Grid::new();
//! grid.sweep_with(Strategy::CachedIndex, 3);
//! assert!(grid.cells().iter().all(|&c| c == 3));
//! ```

pub mod access;
pub mod entities;
pub mod grid;
pub mod records;

pub use tile_sim_types as types;

pub use access::{sweep, CachedIndex, CellAccess, RowOffsets, RowPointers};
pub use entities::{enemy_start, player_start, EntityStore};
pub use grid::{Grid, Strategy, ROW_OFFSETS};
pub use records::{EntityRecord, EntityRecords};
