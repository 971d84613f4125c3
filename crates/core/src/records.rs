//! Array-of-structs baseline.
//!
//! Same population and update rules as [`EntityStore`](crate::EntityStore), but each
//! slot is one composite record. Kept as the comparison point for the
//! structure-of-arrays layout: touching `health` here drags the whole record
//! through the cache.

use crate::entities::{enemy_start, player_start};
use crate::types::{EntityIndex, EntityKind, ENTITY_COUNT, MAX_HEALTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityRecord {
    pub x: u8,
    pub y: u8,
    pub health: u8,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecords {
    slots: [EntityRecord; ENTITY_COUNT],
}

impl EntityRecords {
    pub fn new() -> Self {
        let mut records = Self {
            slots: [EntityRecord::default(); ENTITY_COUNT],
        };
        records.initialize();
        records
    }

    pub fn initialize(&mut self) {
        for index in EntityIndex::enemies() {
            let (x, y) = enemy_start(index.as_usize());
            self.slots[index.as_usize()] = EntityRecord {
                x,
                y,
                health: MAX_HEALTH,
                kind: EntityKind::Enemy,
            };
        }
        let (x, y) = player_start();
        self.slots[EntityIndex::PLAYER.as_usize()] = EntityRecord {
            x,
            y,
            health: MAX_HEALTH,
            kind: EntityKind::Player,
        };
    }

    #[inline(always)]
    pub fn tick(&mut self, index: EntityIndex) {
        let record = &mut self.slots[index.as_usize()];
        if record.health > 0 {
            record.health -= 1;
        }
    }

    #[inline(always)]
    pub fn get(&self, index: EntityIndex) -> &EntityRecord {
        &self.slots[index.as_usize()]
    }

    pub fn records(&self) -> &[EntityRecord] {
        &self.slots
    }
}

impl Default for EntityRecords {
    fn default() -> Self {
        Self::new()
    }
}
