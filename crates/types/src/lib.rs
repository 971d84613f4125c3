//! Shared types and compile-time constants.
//!
//! Everything here is plain data with no dependencies so it can be used from the
//! simulation core, the renderer and the benchmark harness alike.
//!
//! # Screen
//!
//! The output surface is a 40x24 grid of one-byte screen codes stored row-major.
//! Each entity occupies [`GLYPH_WIDTH`] consecutive cells: a tile glyph followed by
//! two health digits.
//!
//! # Entities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ENEMY_COUNT` | 30 | Enemy slots `0..30` |
//! | `ENTITY_COUNT` | 31 | Enemies plus the player |
//! | `PLAYER_SLOT` | 30 | The player always lives in the last slot |
//! | `MAX_HEALTH` | 99 | Starting health, also the largest renderable value |
//!
//! # Benchmark grid
//!
//! A 20x12 byte map stored in one flat array of [`MAP_CELLS`] bytes.
//!
//! # Examples
//!
//! ```
//! use tile_sim_types::{EntityIndex, EntityKind, ENTITY_COUNT, PLAYER_SLOT};
//!
//! assert_eq!(EntityIndex::PLAYER.as_usize(), PLAYER_SLOT);
//! assert!(EntityIndex::new(ENTITY_COUNT).is_none());
//! assert_eq!(EntityKind::Enemy.table_index(), 2);
//! assert_eq!(EntityIndex::enemies().count(), 30);
//! ```

/// Surface width in cells (also the row stride)
pub const SCREEN_WIDTH: usize = 40;

/// Surface height in rows
pub const SCREEN_HEIGHT: usize = 24;

/// Number of enemy slots
pub const ENEMY_COUNT: usize = 30;

/// Enemies plus one player
pub const ENTITY_COUNT: usize = ENEMY_COUNT + 1;

/// Slot index reserved for the player
pub const PLAYER_SLOT: usize = ENEMY_COUNT;

/// Row added to `i / 2` when scattering enemy `i`
pub const ENEMY_ROW_OFFSET: usize = 9;

/// Starting row of the player
pub const PLAYER_ROW: usize = 0;

/// Starting (and maximum) health
pub const MAX_HEALTH: u8 = 99;

/// Size of the health lookup domain, `0..=MAX_HEALTH`
pub const HEALTH_VALUES: usize = MAX_HEALTH as usize + 1;

/// Screen code of the digit `0`; digit `d` is `FIRST_DIGIT_CODE + d`
pub const FIRST_DIGIT_CODE: u8 = 0x10;

/// Cells written per rendered entity
pub const GLYPH_WIDTH: usize = 3;

/// Benchmark grid width
pub const MAP_WIDTH: usize = 20;

/// Benchmark grid height
pub const MAP_HEIGHT: usize = 12;

/// Total number of grid cells
pub const MAP_CELLS: usize = MAP_WIDTH * MAP_HEIGHT;

/// Frames simulated per measured run
pub const FRAMES_PER_RUN: u32 = 100;

/// Full grid sweeps per measured run
pub const SWEEPS_PER_RUN: u32 = 100;

// Row offsets are stored as bytes.
const _: () = assert!(MAP_CELLS <= 256);
// Entity indices are stored as bytes.
const _: () = assert!(ENTITY_COUNT <= 256);

/// Entity variant. Discriminants double as lookup-table indices.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    /// Reserved; never spawned during a normal run
    #[default]
    Dead = 0,
    Player = 1,
    Enemy = 2,
}

impl EntityKind {
    /// Number of variants, i.e. the length of a kind-indexed table.
    pub const COUNT: usize = 3;

    /// All variants in discriminant order
    pub const ALL: [EntityKind; Self::COUNT] =
        [EntityKind::Dead, EntityKind::Player, EntityKind::Enemy];

    #[inline(always)]
    pub const fn table_index(self) -> usize {
        self as u8 as usize
    }
}

/// Index of one entity slot.
///
/// Always `< ENTITY_COUNT`; enemies occupy `0..ENEMY_COUNT` and the player
/// occupies [`EntityIndex::PLAYER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityIndex(u8);

impl EntityIndex {
    pub const PLAYER: EntityIndex = EntityIndex(PLAYER_SLOT as u8);

    pub const fn new(slot: usize) -> Option<Self> {
        if slot < ENTITY_COUNT {
            Some(EntityIndex(slot as u8))
        } else {
            None
        }
    }

    #[inline(always)]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub const fn is_player(self) -> bool {
        self.0 as usize == PLAYER_SLOT
    }

    /// Enemy slots in ascending order
    pub fn enemies() -> impl Iterator<Item = EntityIndex> {
        (0..ENEMY_COUNT as u8).map(EntityIndex)
    }

    /// Every slot in ascending order, player last
    pub fn all() -> impl Iterator<Item = EntityIndex> {
        (0..ENTITY_COUNT as u8).map(EntityIndex)
    }
}
