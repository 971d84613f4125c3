//! Entity glyph drawing.
//!
//! An entity is drawn as three consecutive cells starting at its position:
//! tile glyph, tens digit, ones digit. [`draw_entity`] is the table-driven path
//! used every frame. [`draw_entity_computed`] and [`draw_record`] derive the same
//! bytes with multiplication, division and a `match`, and exist as baselines.

use crate::core::{EntityRecord, EntityStore};
use crate::surface::Surface;
use crate::tables::{tile_glyph, LookupTables, TILE_GLYPHS};
use crate::types::{EntityIndex, EntityKind, FIRST_DIGIT_CODE, GLYPH_WIDTH};

#[inline(always)]
fn check_bounds(surface: &Surface, x: u8, y: u8) {
    debug_assert!(
        (x as usize) + GLYPH_WIDTH <= surface.stride() && (y as u16) < surface.height(),
        "glyph at ({}, {}) does not fit a {}x{} surface",
        x,
        y,
        surface.width(),
        surface.height()
    );
}

#[inline(always)]
fn write_glyph(surface: &mut Surface, offset: usize, glyph: [u8; GLYPH_WIDTH]) {
    surface.bytes_mut()[offset..offset + GLYPH_WIDTH].copy_from_slice(&glyph);
}

/// Draw one entity using the precomputed tables.
#[inline(always)]
pub fn draw_entity(
    surface: &mut Surface,
    tables: &LookupTables,
    store: &EntityStore,
    index: EntityIndex,
) {
    debug_assert_eq!(tables.stride(), surface.stride());
    let (x, y) = store.position(index);
    check_bounds(surface, x, y);

    let hp = store.health(index) as usize;
    let offset = tables.row_base(y) + x as usize;
    write_glyph(
        surface,
        offset,
        [
            TILE_GLYPHS[store.kind(index).table_index()],
            tables.tens()[hp],
            tables.ones()[hp],
        ],
    );
}

#[inline(always)]
fn computed_glyph(surface: &mut Surface, x: u8, y: u8, health: u8, kind: EntityKind) {
    check_bounds(surface, x, y);
    let offset = (y as usize) * surface.stride() + x as usize;
    write_glyph(
        surface,
        offset,
        [
            tile_glyph(kind),
            health / 10 + FIRST_DIGIT_CODE,
            health % 10 + FIRST_DIGIT_CODE,
        ],
    );
}

/// Draw one entity from the store without lookup tables.
pub fn draw_entity_computed(surface: &mut Surface, store: &EntityStore, index: EntityIndex) {
    let (x, y) = store.position(index);
    computed_glyph(surface, x, y, store.health(index), store.kind(index));
}

/// Draw one array-of-structs record without lookup tables.
pub fn draw_record(surface: &mut Surface, record: &EntityRecord) {
    computed_glyph(surface, record.x, record.y, record.health, record.kind);
}
