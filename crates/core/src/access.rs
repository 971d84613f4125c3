//! Grid access strategies.
//!
//! Three ways to turn `(x, y)` into a cell of the flat map. They are deliberately
//! kept as separate types rather than one "best" accessor: comparing their cost is
//! the point of the benchmark.
//!
//! | Strategy | Per access |
//! |----------|------------|
//! | [`RowPointers`] | load row slice, index by `x` |
//! | [`RowOffsets`] | load row offset, add `x`, index flat array |
//! | [`CachedIndex`] | as B, but the composite index is kept and reused for the write |
//!
//! Coordinates are contract-checked with `debug_assert!`; release builds still
//! go through slice bounds checks.

use arrayvec::ArrayVec;

use crate::grid::ROW_OFFSETS;
use crate::types::{MAP_CELLS, MAP_HEIGHT, MAP_WIDTH};

/// Read/write a grid cell by logical coordinate.
pub trait CellAccess {
    fn get(&self, x: u8, y: u8) -> u8;

    fn set(&mut self, x: u8, y: u8, value: u8);

    /// Read the cell, add one (wrapping) and write it back.
    #[inline(always)]
    fn increment(&mut self, x: u8, y: u8) {
        let value = self.get(x, y);
        self.set(x, y, value.wrapping_add(1));
    }
}

#[inline(always)]
fn debug_check(x: u8, y: u8) {
    debug_assert!(
        (x as usize) < MAP_WIDTH && (y as usize) < MAP_HEIGHT,
        "grid access out of bounds ({}, {}) for {}x{} map",
        x,
        y,
        MAP_WIDTH,
        MAP_HEIGHT
    );
}

/// Row-major sweep: for each repetition, increment every cell once.
pub fn sweep<A: CellAccess>(access: &mut A, repetitions: u32) {
    for _ in 0..repetitions {
        for y in 0..MAP_HEIGHT as u8 {
            for x in 0..MAP_WIDTH as u8 {
                access.increment(x, y);
            }
        }
    }
}

/// Strategy A: a table of per-row slices, `rows[y][x]`.
pub struct RowPointers<'g> {
    rows: [&'g mut [u8]; MAP_HEIGHT],
}

impl<'g> RowPointers<'g> {
    /// Split the grid into one slice per row.
    pub fn new(cells: &'g mut [u8; MAP_CELLS]) -> Self {
        let rows: ArrayVec<&'g mut [u8], MAP_HEIGHT> =
            cells.chunks_exact_mut(MAP_WIDTH).collect();
        match rows.into_inner() {
            Ok(rows) => Self { rows },
            Err(_) => unreachable!("MAP_CELLS is exactly MAP_HEIGHT rows"),
        }
    }
}

impl CellAccess for RowPointers<'_> {
    #[inline(always)]
    fn get(&self, x: u8, y: u8) -> u8 {
        debug_check(x, y);
        self.rows[y as usize][x as usize]
    }

    #[inline(always)]
    fn set(&mut self, x: u8, y: u8, value: u8) {
        debug_check(x, y);
        self.rows[y as usize][x as usize] = value;
    }
}

/// Strategy B: `cells[x + ROW_OFFSETS[y]]`.
pub struct RowOffsets<'g> {
    cells: &'g mut [u8; MAP_CELLS],
}

impl<'g> RowOffsets<'g> {
    pub fn new(cells: &'g mut [u8; MAP_CELLS]) -> Self {
        Self { cells }
    }
}

impl CellAccess for RowOffsets<'_> {
    #[inline(always)]
    fn get(&self, x: u8, y: u8) -> u8 {
        debug_check(x, y);
        self.cells[x as usize + ROW_OFFSETS[y as usize] as usize]
    }

    #[inline(always)]
    fn set(&mut self, x: u8, y: u8, value: u8) {
        debug_check(x, y);
        self.cells[x as usize + ROW_OFFSETS[y as usize] as usize] = value;
    }
}

/// Strategy C: the composite index is computed once by [`CachedIndex::locate`]
/// and reused by [`CachedIndex::read`] and [`CachedIndex::write`].
pub struct CachedIndex<'g> {
    cells: &'g mut [u8; MAP_CELLS],
    index: usize,
}

impl<'g> CachedIndex<'g> {
    pub fn new(cells: &'g mut [u8; MAP_CELLS]) -> Self {
        Self { cells, index: 0 }
    }

    /// Compute and hold `x + ROW_OFFSETS[y]`.
    #[inline(always)]
    pub fn locate(&mut self, x: u8, y: u8) {
        debug_check(x, y);
        self.index = x as usize + ROW_OFFSETS[y as usize] as usize;
    }

    /// The held index.
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn read(&self) -> u8 {
        self.cells[self.index]
    }

    #[inline(always)]
    pub fn write(&mut self, value: u8) {
        self.cells[self.index] = value;
    }
}

impl CellAccess for CachedIndex<'_> {
    #[inline(always)]
    fn get(&self, x: u8, y: u8) -> u8 {
        debug_check(x, y);
        self.cells[x as usize + ROW_OFFSETS[y as usize] as usize]
    }

    #[inline(always)]
    fn set(&mut self, x: u8, y: u8, value: u8) {
        self.locate(x, y);
        self.write(value);
    }

    #[inline(always)]
    fn increment(&mut self, x: u8, y: u8) {
        self.locate(x, y);
        let value = self.read();
        self.write(value.wrapping_add(1));
    }
}
