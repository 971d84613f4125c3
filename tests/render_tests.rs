//! Rendering tests - lookup tables, glyph placement and idempotence

use tile_sim::core::EntityStore;
use tile_sim::term::{
    draw_entity, draw_entity_computed, tile_glyph, LookupTables, Surface, TILE_GLYPHS,
};
use tile_sim::types::{EntityIndex, EntityKind, FIRST_DIGIT_CODE, SCREEN_HEIGHT, SCREEN_WIDTH};

fn screen() -> (Surface, LookupTables) {
    let surface = Surface::new(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16);
    let tables = LookupTables::new(surface.stride(), SCREEN_HEIGHT).unwrap();
    (surface, tables)
}

#[test]
fn test_digit_tables_cover_every_health_value() {
    let (_, tables) = screen();
    for hp in 0..100usize {
        let text = format!("{:02}", hp);
        let digits = text.as_bytes();
        assert_eq!(tables.tens()[hp], digits[0] - b'0' + FIRST_DIGIT_CODE, "tens {}", hp);
        assert_eq!(tables.ones()[hp], digits[1] - b'0' + FIRST_DIGIT_CODE, "ones {}", hp);
    }
    assert!(tables.verify().is_ok());
}

#[test]
fn test_glyph_table_matches_kinds() {
    assert_eq!(TILE_GLYPHS[EntityKind::Dead.table_index()], b'x');
    assert_eq!(TILE_GLYPHS[EntityKind::Player.table_index()], b'p');
    assert_eq!(TILE_GLYPHS[EntityKind::Enemy.table_index()], b'e');
    for kind in EntityKind::ALL {
        assert_eq!(TILE_GLYPHS[kind.table_index()], tile_glyph(kind));
    }
}

#[test]
fn test_row_bases_avoid_runtime_multiply() {
    let (surface, tables) = screen();
    for y in 0..SCREEN_HEIGHT {
        assert_eq!(tables.row_base(y as u8), y * surface.stride());
    }
}

#[test]
fn test_enemy_glyph_shows_two_digit_health() {
    let (mut surface, tables) = screen();
    let mut store = EntityStore::new();
    let idx = EntityIndex::new(3).unwrap();
    store.set_health(idx, 7);

    draw_entity(&mut surface, &tables, &store, idx);

    // Enemy 3 sits at (15, 10).
    assert_eq!(&surface.row_text(10)[15..18], "e07");
    assert_eq!(surface.get(14, 10), Some(0));
    assert_eq!(surface.get(18, 10), Some(0));
}

#[test]
fn test_render_is_idempotent() {
    let (mut surface, tables) = screen();
    let store = EntityStore::new();

    for index in EntityIndex::all() {
        draw_entity(&mut surface, &tables, &store, index);
    }
    let first = surface.clone();

    for index in EntityIndex::all() {
        draw_entity(&mut surface, &tables, &store, index);
    }
    assert_eq!(first, surface);
}

#[test]
fn test_table_and_computed_renderers_agree_for_whole_population() {
    let (mut a, tables) = screen();
    let mut b = a.clone();
    let mut store = EntityStore::new();

    for _ in 0..120 {
        for index in EntityIndex::enemies() {
            store.tick(index);
            draw_entity(&mut a, &tables, &store, index);
            draw_entity_computed(&mut b, &store, index);
        }
        draw_entity(&mut a, &tables, &store, EntityIndex::PLAYER);
        draw_entity_computed(&mut b, &store, EntityIndex::PLAYER);
        assert_eq!(a, b);
    }
}

#[test]
fn test_text_lines_decode_screen() {
    let (mut surface, tables) = screen();
    let store = EntityStore::new();
    draw_entity(&mut surface, &tables, &store, EntityIndex::PLAYER);

    let lines = surface.text_lines();
    assert_eq!(lines.len(), SCREEN_HEIGHT);
    assert_eq!(lines[0].trim(), "p99");
    assert!(lines[1..].iter().all(|l| l.trim().is_empty()));
}
