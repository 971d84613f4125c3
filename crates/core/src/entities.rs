//! Entity store - structure-of-arrays entity state
//!
//! Every attribute lives in its own fixed array indexed by [`EntityIndex`]:
//!
//! ```text
//! x:      [x0, x1, ... x29, xP]
//! y:      [y0, y1, ... y29, yP]
//! health: [h0, h1, ... h29, hP]
//! kind:   [k0, k1, ... k29, kP]
//! ```
//!
//! The per-frame update only touches `health`; rendering only reads `x`, `y`,
//! `kind` and `health`. Population is static: slots are filled once and never
//! added or removed.

use crate::types::{
    EntityIndex, EntityKind, ENEMY_ROW_OFFSET, ENTITY_COUNT, GLYPH_WIDTH, MAX_HEALTH, PLAYER_ROW,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Enemy scatter pattern: `((i * 5) mod SCREEN_WIDTH, i / 2 + ENEMY_ROW_OFFSET)`.
#[inline]
pub fn enemy_start(slot: usize) -> (u8, u8) {
    (
        ((slot * 5) % SCREEN_WIDTH) as u8,
        (slot / 2 + ENEMY_ROW_OFFSET) as u8,
    )
}

/// Player start position, centred on [`PLAYER_ROW`].
#[inline]
pub fn player_start() -> (u8, u8) {
    ((SCREEN_WIDTH / 2) as u8, PLAYER_ROW as u8)
}

/// Fixed-capacity entity storage, one array per attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore {
    x: [u8; ENTITY_COUNT],
    y: [u8; ENTITY_COUNT],
    health: [u8; ENTITY_COUNT],
    kind: [EntityKind; ENTITY_COUNT],
}

impl EntityStore {
    /// Create a store already populated with the starting layout.
    pub fn new() -> Self {
        let mut store = Self {
            x: [0; ENTITY_COUNT],
            y: [0; ENTITY_COUNT],
            health: [0; ENTITY_COUNT],
            kind: [EntityKind::Dead; ENTITY_COUNT],
        };
        store.initialize();
        store
    }

    /// Reset every slot to the starting layout.
    ///
    /// Enemies are scattered with [`enemy_start`], then the player is placed at
    /// [`player_start`]. All entities start at [`MAX_HEALTH`].
    pub fn initialize(&mut self) {
        for index in EntityIndex::enemies() {
            let (x, y) = enemy_start(index.as_usize());
            self.place(index, x, y);
            self.health[index.as_usize()] = MAX_HEALTH;
            self.kind[index.as_usize()] = EntityKind::Enemy;
        }

        let (x, y) = player_start();
        self.place(EntityIndex::PLAYER, x, y);
        self.health[EntityIndex::PLAYER.as_usize()] = MAX_HEALTH;
        self.kind[EntityIndex::PLAYER.as_usize()] = EntityKind::Player;
    }

    /// Write a position. The whole glyph, not just its first cell, must fit on
    /// screen: `x + GLYPH_WIDTH <= SCREEN_WIDTH`.
    #[inline]
    pub fn place(&mut self, index: EntityIndex, x: u8, y: u8) {
        debug_assert!(
            (x as usize) + GLYPH_WIDTH <= SCREEN_WIDTH && (y as usize) < SCREEN_HEIGHT,
            "place: glyph at ({}, {}) runs off screen",
            x,
            y
        );
        let i = index.as_usize();
        self.x[i] = x;
        self.y[i] = y;
    }

    /// Apply one frame of damage: decrement health by one, saturating at zero.
    #[inline(always)]
    pub fn tick(&mut self, index: EntityIndex) {
        let hp = &mut self.health[index.as_usize()];
        if *hp > 0 {
            *hp -= 1;
        }
    }

    /// Number of slots (always [`ENTITY_COUNT`]).
    pub const fn len(&self) -> usize {
        ENTITY_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline(always)]
    pub fn x(&self, index: EntityIndex) -> u8 {
        self.x[index.as_usize()]
    }

    #[inline(always)]
    pub fn y(&self, index: EntityIndex) -> u8 {
        self.y[index.as_usize()]
    }

    #[inline(always)]
    pub fn position(&self, index: EntityIndex) -> (u8, u8) {
        (self.x(index), self.y(index))
    }

    #[inline(always)]
    pub fn health(&self, index: EntityIndex) -> u8 {
        self.health[index.as_usize()]
    }

    #[inline(always)]
    pub fn kind(&self, index: EntityIndex) -> EntityKind {
        self.kind[index.as_usize()]
    }

    /// Overwrite health, e.g. to set up a rendering scenario.
    pub fn set_health(&mut self, index: EntityIndex, health: u8) {
        debug_assert!(health <= MAX_HEALTH, "set_health: {} > {}", health, MAX_HEALTH);
        self.health[index.as_usize()] = health;
    }

    /// The health column, for whole-population checks.
    pub fn health_column(&self) -> &[u8; ENTITY_COUNT] {
        &self.health
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
