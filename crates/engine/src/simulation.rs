//! The frame-stepping seam shared by every entity layout.

use anyhow::{ensure, Result};

use crate::term::Surface;
use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// One entity layout plus the way it updates and draws a frame.
pub trait Simulation {
    /// Short name used in reports.
    const NAME: &'static str;

    /// Restore the starting layout.
    fn reset(&mut self);

    /// Damage every enemy and draw every entity.
    ///
    /// Enemies are handled in ascending slot order, each ticked then drawn; the
    /// player is drawn last and never ticked.
    fn frame(&mut self, surface: &mut Surface);
}

/// Run `frames` consecutive frames.
pub fn run_frames<S: Simulation>(sim: &mut S, surface: &mut Surface, frames: u32) {
    for _ in 0..frames {
        sim.frame(surface);
    }
}

/// Engines draw at fixed screen positions, so the surface must cover the screen.
pub(crate) fn check_surface(surface: &Surface) -> Result<()> {
    ensure!(
        surface.stride() == SCREEN_WIDTH && surface.height() as usize >= SCREEN_HEIGHT,
        "surface is {}x{}, expected {}x{}",
        surface.width(),
        surface.height(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT
    );
    Ok(())
}

/// Entity layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Structure-of-arrays, explicit index, lookup tables
    Soa,
    /// Structure-of-arrays, one scoped index cursor per frame, lookup tables
    Cursor,
    /// Array-of-structs, computed offsets and digits
    Aos,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Soa, Layout::Cursor, Layout::Aos];

    pub fn label(self) -> &'static str {
        match self {
            Layout::Soa => "soa",
            Layout::Cursor => "cursor",
            Layout::Aos => "aos",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "soa" => Some(Layout::Soa),
            "cursor" => Some(Layout::Cursor),
            "aos" => Some(Layout::Aos),
            _ => None,
        }
    }
}
