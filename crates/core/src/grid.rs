//! Grid module - the benchmark map
//!
//! A 20x12 byte map stored as one flat row-major array. The three access
//! strategies in [`crate::access`] all borrow this same storage, so they can be
//! swapped freely and compared on equal footing.

use crate::access::{sweep, CachedIndex, RowOffsets, RowPointers};
use crate::types::{MAP_CELLS, MAP_HEIGHT, MAP_WIDTH};

const fn build_row_offsets() -> [u8; MAP_HEIGHT] {
    let mut table = [0u8; MAP_HEIGHT];
    let mut y = 0;
    while y < MAP_HEIGHT {
        table[y] = (y * MAP_WIDTH) as u8;
        y += 1;
    }
    table
}

/// `ROW_OFFSETS[y] == y * MAP_WIDTH`, computed at compile time.
pub static ROW_OFFSETS: [u8; MAP_HEIGHT] = build_row_offsets();

/// Which indexing strategy a sweep goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A: `rows[y][x]`
    RowPointers,
    /// B: `cells[x + ROW_OFFSETS[y]]`
    RowOffsets,
    /// C: `index = x + ROW_OFFSETS[y]`, reused for read and write
    CachedIndex,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::RowPointers,
        Strategy::RowOffsets,
        Strategy::CachedIndex,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::RowPointers => "row-pointers",
            Strategy::RowOffsets => "row-offsets",
            Strategy::CachedIndex => "cached-index",
        }
    }

    /// Parse a strategy name (case-insensitive).
    ///
    /// Accepts the letter used in reports (`a`, `b`, `c`), a short name or the label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "pointers" | "row-pointers" => Some(Strategy::RowPointers),
            "b" | "offsets" | "row-offsets" => Some(Strategy::RowOffsets),
            "c" | "cached" | "cached-index" => Some(Strategy::CachedIndex),
            _ => None,
        }
    }
}

/// Flat byte grid, row-major (`y * MAP_WIDTH + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; MAP_CELLS],
}

impl Grid {
    pub fn new() -> Self {
        Self::filled(0)
    }

    pub fn filled(value: u8) -> Self {
        Self {
            cells: [value; MAP_CELLS],
        }
    }

    pub fn width(&self) -> usize {
        MAP_WIDTH
    }

    pub fn height(&self) -> usize {
        MAP_HEIGHT
    }

    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }

    pub fn cells(&self) -> &[u8; MAP_CELLS] {
        &self.cells
    }

    pub fn get_linear(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Strategy A over this grid.
    pub fn row_pointers(&mut self) -> RowPointers<'_> {
        RowPointers::new(&mut self.cells)
    }

    /// Strategy B over this grid.
    pub fn row_offsets(&mut self) -> RowOffsets<'_> {
        RowOffsets::new(&mut self.cells)
    }

    /// Strategy C over this grid.
    pub fn cached_index(&mut self) -> CachedIndex<'_> {
        CachedIndex::new(&mut self.cells)
    }

    /// Run `repetitions` read-increment-write sweeps through one strategy.
    pub fn sweep_with(&mut self, strategy: Strategy, repetitions: u32) {
        match strategy {
            Strategy::RowPointers => sweep(&mut self.row_pointers(), repetitions),
            Strategy::RowOffsets => sweep(&mut self.row_offsets(), repetitions),
            Strategy::CachedIndex => sweep(&mut self.cached_index(), repetitions),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
