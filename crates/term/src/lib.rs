//! Output side: the linear surface, lookup tables and glyph drawing.
//!
//! Drawing writes raw screen codes into a [`Surface`]; nothing here touches a
//! terminal except [`TerminalRenderer`], which is only used to watch a run.
//!
//! - [`surface`]: byte buffer with a known stride
//! - [`tables`]: digit, glyph and row-base tables, verified on construction
//! - [`draw`]: table-driven and computed entity drawing
//! - [`renderer`]: crossterm presentation of a surface

pub mod draw;
pub mod renderer;
pub mod surface;
pub mod tables;

pub use tile_sim_core as core;
pub use tile_sim_types as types;

pub use draw::{draw_entity, draw_entity_computed, draw_record};
pub use renderer::{
    encode_diff_into, encode_enter_into, encode_exit_into, encode_full_into, TerminalRenderer,
};
pub use surface::{decode_screen_code, Surface};
pub use tables::{tile_glyph, LookupTables, TILE_GLYPHS};
