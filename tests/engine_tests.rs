//! Engine tests - frame order, layout equivalence and reset

use tile_sim::engine::{run_frames, AosEngine, CursorEngine, Simulation, SoaEngine};
use tile_sim::term::Surface;
use tile_sim::types::{EntityIndex, FIRST_DIGIT_CODE, SCREEN_HEIGHT, SCREEN_WIDTH};

fn surface() -> Surface {
    Surface::new(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
}

fn frames_of<S: Simulation>(mut sim: S, frames: u32) -> Surface {
    let mut s = surface();
    run_frames(&mut sim, &mut s, frames);
    s
}

#[test]
fn test_first_frame_damages_enemies_but_not_player() {
    let mut s = surface();
    let mut engine = SoaEngine::new(&s).unwrap();
    engine.frame(&mut s);

    for index in EntityIndex::enemies() {
        assert_eq!(engine.store().health(index), 98);
    }
    assert_eq!(engine.store().health(EntityIndex::PLAYER), 99);

    assert_eq!(s.row_text(0).trim(), "p99");
    assert_eq!(&s.row_text(9)[0..3], "e98");
}

#[test]
fn test_layouts_draw_identical_screens() {
    for frames in [0, 1, 50, 99, 100, 150] {
        let base = surface();
        let soa = frames_of(SoaEngine::new(&base).unwrap(), frames);
        let cursor = frames_of(CursorEngine::new(&base).unwrap(), frames);
        let aos = frames_of(AosEngine::new(&base).unwrap(), frames);
        assert_eq!(soa, cursor, "soa vs cursor after {} frames", frames);
        assert_eq!(soa, aos, "soa vs aos after {} frames", frames);
    }
}

#[test]
fn test_health_bottoms_out_on_screen() {
    let s = frames_of(SoaEngine::new(&surface()).unwrap(), 100);

    // Enemy 0 at (0, 9): glyph then "00".
    assert_eq!(s.get(0, 9), Some(b'e'));
    assert_eq!(s.get(1, 9), Some(FIRST_DIGIT_CODE));
    assert_eq!(s.get(2, 9), Some(FIRST_DIGIT_CODE));
    assert_eq!(s.row_text(0).trim(), "p99");
}

#[test]
fn test_each_enemy_row_holds_two_glyphs() {
    // Enemies 2r and 2r+1 share row r + 9, five columns apart.
    let s = frames_of(SoaEngine::new(&surface()).unwrap(), 1);
    for y in 9..24u16 {
        let glyphs = s.row_text(y).matches('e').count();
        assert_eq!(glyphs, 2, "row {}", y);
    }
}

#[test]
fn test_reset_restores_starting_layout() {
    let mut s = surface();
    let mut engine = CursorEngine::new(&s).unwrap();
    run_frames(&mut engine, &mut s, 30);
    assert_eq!(engine.store().health(EntityIndex::new(0).unwrap()), 69);

    engine.reset();
    engine.frame(&mut s);
    assert_eq!(engine.store().health(EntityIndex::new(0).unwrap()), 98);

    let mut aos = AosEngine::new(&s).unwrap();
    run_frames(&mut aos, &mut s, 5);
    aos.reset();
    assert_eq!(aos.records().get(EntityIndex::PLAYER).health, 99);
    assert_eq!(aos.records().get(EntityIndex::new(1).unwrap()).health, 99);
}

#[test]
fn test_undersized_surface_is_rejected() {
    let small = Surface::new(20, 12);
    assert!(SoaEngine::new(&small).is_err());
    assert!(CursorEngine::new(&small).is_err());
    assert!(AosEngine::new(&small).is_err());
}
