//! Entity store tests - layout, decay and capacity

use tile_sim::core::{EntityRecords, EntityStore};
use tile_sim::types::{
    EntityIndex, EntityKind, ENEMY_COUNT, ENTITY_COUNT, MAX_HEALTH, PLAYER_ROW, SCREEN_WIDTH,
};

#[test]
fn test_initialize_places_enemies_on_scatter_pattern() {
    let store = EntityStore::new();

    for index in EntityIndex::enemies() {
        let i = index.as_usize();
        assert_eq!(
            store.position(index),
            (((i * 5) % SCREEN_WIDTH) as u8, (i / 2 + 9) as u8),
            "enemy {}",
            i
        );
        assert_eq!(store.health(index), 99);
        assert_eq!(store.kind(index), EntityKind::Enemy);
    }
}

#[test]
fn test_initialize_places_player_last() {
    let store = EntityStore::new();
    let player = EntityIndex::PLAYER;

    assert_eq!(player.as_usize(), ENTITY_COUNT - 1);
    assert_eq!(store.position(player), (20, PLAYER_ROW as u8));
    assert_eq!(store.health(player), MAX_HEALTH);
    assert_eq!(store.kind(player), EntityKind::Player);
}

#[test]
fn test_initialize_is_deterministic_and_resets() {
    let a = EntityStore::new();
    let mut b = EntityStore::new();
    assert_eq!(a, b);

    for index in EntityIndex::all() {
        b.tick(index);
    }
    assert_ne!(a, b);

    b.initialize();
    assert_eq!(a, b);
}

#[test]
fn test_tick_counts_down_to_zero_and_stops() {
    let mut store = EntityStore::new();
    let idx = EntityIndex::new(12).unwrap();

    let mut last = store.health(idx);
    for _ in 0..99 {
        store.tick(idx);
        let hp = store.health(idx);
        assert_eq!(hp + 1, last);
        last = hp;
    }
    assert_eq!(store.health(idx), 0);

    store.tick(idx);
    assert_eq!(store.health(idx), 0);
}

#[test]
fn test_capacity_is_fixed() {
    let mut store = EntityStore::new();
    assert_eq!(ENEMY_COUNT, 30);
    assert_eq!(store.len(), 31);
    assert_eq!(store.health_column().len(), 31);

    for _ in 0..150 {
        for index in EntityIndex::enemies() {
            store.tick(index);
        }
    }
    assert_eq!(store.len(), 31);
    assert!(store.health_column()[..ENEMY_COUNT].iter().all(|&h| h == 0));
    assert_eq!(store.health(EntityIndex::PLAYER), MAX_HEALTH);
}

#[test]
fn test_records_baseline_matches_store() {
    let mut store = EntityStore::new();
    let mut records = EntityRecords::new();
    assert_eq!(records.records().len(), ENTITY_COUNT);

    for _ in 0..40 {
        for index in EntityIndex::enemies() {
            store.tick(index);
            records.tick(index);
        }
    }

    for index in EntityIndex::all() {
        let r = records.get(index);
        assert_eq!((r.x, r.y), store.position(index));
        assert_eq!(r.health, store.health(index));
        assert_eq!(r.kind, store.kind(index));
    }
}
