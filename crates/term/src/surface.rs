//! Linear output surface.
//!
//! A byte-addressable display buffer with a known stride, standing in for the
//! screen memory handed over by the environment. Each byte is a screen code:
//! digits are [`FIRST_DIGIT_CODE`]` + d`, tiles are ASCII letters, `0` is blank.

use crate::types::FIRST_DIGIT_CODE;

/// Row-major byte buffer, `stride == width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    bytes: Vec<u8>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            bytes: vec![0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Distance in bytes between the starts of two consecutive rows.
    pub fn stride(&self) -> usize {
        self.width as usize
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.bytes[(y as usize) * self.stride() + (x as usize)])
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Bytes of row `y`, or an empty slice when out of range.
    pub fn row(&self, y: u16) -> &[u8] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * self.stride();
        &self.bytes[start..start + self.stride()]
    }

    /// Decode row `y` into printable text.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|&code| decode_screen_code(code)).collect()
    }

    /// Every row as text, top to bottom.
    pub fn text_lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }
}

/// Map a screen code to the character a terminal should show.
pub fn decode_screen_code(code: u8) -> char {
    match code {
        0 => ' ',
        c if (FIRST_DIGIT_CODE..FIRST_DIGIT_CODE + 10).contains(&c) => {
            (b'0' + (c - FIRST_DIGIT_CODE)) as char
        }
        c if c.is_ascii_graphic() || c == b' ' => c as char,
        _ => '?',
    }
}
