//! Precomputed lookup tables for the renderer.
//!
//! Rendering an entity needs a row base, a tile glyph and two health digits. All
//! four come from the tables here so the draw path has no multiply, divide or
//! branch on the entity kind.

use anyhow::{ensure, Result};

use crate::types::{EntityKind, FIRST_DIGIT_CODE, HEALTH_VALUES};

/// Tile glyph per [`EntityKind`], indexed by discriminant.
pub const TILE_GLYPHS: [u8; EntityKind::COUNT] = [b'x', b'p', b'e'];

/// Reference glyph selection, used to verify [`TILE_GLYPHS`] and by the computed
/// renderer.
pub fn tile_glyph(kind: EntityKind) -> u8 {
    match kind {
        EntityKind::Player => b'p',
        EntityKind::Enemy => b'e',
        EntityKind::Dead => b'x',
    }
}

/// Digit and row tables, built once before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTables {
    tens: [u8; HEALTH_VALUES],
    ones: [u8; HEALTH_VALUES],
    row_base: Vec<u16>,
    stride: usize,
}

impl LookupTables {
    /// Build tables for a surface with `stride` bytes per row and `rows` rows.
    ///
    /// Every entry is checked against plain arithmetic before the tables are
    /// handed out.
    pub fn new(stride: usize, rows: usize) -> Result<Self> {
        ensure!(
            stride * rows <= u16::MAX as usize + 1,
            "surface of {}x{} does not fit 16-bit row bases",
            stride,
            rows
        );

        let mut tens = [0u8; HEALTH_VALUES];
        let mut ones = [0u8; HEALTH_VALUES];
        for hp in 0..HEALTH_VALUES {
            tens[hp] = (hp / 10) as u8 + FIRST_DIGIT_CODE;
            ones[hp] = (hp % 10) as u8 + FIRST_DIGIT_CODE;
        }

        let row_base = (0..rows).map(|y| (y * stride) as u16).collect();

        let tables = Self {
            tens,
            ones,
            row_base,
            stride,
        };
        tables.verify()?;
        Ok(tables)
    }

    /// Exhaustively compare every entry with its arithmetic definition.
    pub fn verify(&self) -> Result<()> {
        for (i, kind) in EntityKind::ALL.iter().enumerate() {
            ensure!(
                TILE_GLYPHS[i] == tile_glyph(*kind),
                "tile glyph for {:?} is {:#04x}",
                kind,
                TILE_GLYPHS[i]
            );
        }

        for hp in 0..HEALTH_VALUES {
            let tens = (hp / 10) as u8 + FIRST_DIGIT_CODE;
            let ones = (hp % 10) as u8 + FIRST_DIGIT_CODE;
            ensure!(
                self.tens[hp] == tens,
                "tens digit for {} is {:#04x}, expected {:#04x}",
                hp,
                self.tens[hp],
                tens
            );
            ensure!(
                self.ones[hp] == ones,
                "ones digit for {} is {:#04x}, expected {:#04x}",
                hp,
                self.ones[hp],
                ones
            );
        }

        for (y, &base) in self.row_base.iter().enumerate() {
            ensure!(
                base as usize == y * self.stride,
                "row base for {} is {}, expected {}",
                y,
                base,
                y * self.stride
            );
        }

        Ok(())
    }

    #[inline(always)]
    pub fn tens(&self) -> &[u8; HEALTH_VALUES] {
        &self.tens
    }

    #[inline(always)]
    pub fn ones(&self) -> &[u8; HEALTH_VALUES] {
        &self.ones
    }

    /// Offset of the first cell of row `y`.
    #[inline(always)]
    pub fn row_base(&self, y: u8) -> usize {
        self.row_base[y as usize] as usize
    }

    pub fn rows(&self) -> usize {
        self.row_base.len()
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}
