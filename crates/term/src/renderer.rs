//! TerminalRenderer: shows a surface on a real terminal.
//!
//! Only used for watching a run; measured regions never touch the terminal.
//! The terminal stays in cooked mode, so Ctrl-C still interrupts a long watch.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::surface::{decode_screen_code, Surface};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Surface>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        self.flush_buf()
    }

    /// Draw a surface, diffing against the previously drawn one.
    pub fn draw(&mut self, surface: &Surface) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev)
                if prev.width() == surface.width() && prev.height() == surface.height() =>
            {
                encode_diff_into(&prev, surface, &mut self.buf)?;
                self.flush_buf()?;
                prev.bytes_mut().copy_from_slice(surface.bytes());
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(surface, &mut self.buf)?;
                self.flush_buf()?;
                self.last = Some(surface.clone());
            }
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Switch to the alternate screen without touching the terminal's input mode.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

/// Undo [`encode_enter_into`].
pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Foreground color for a screen code, `None` for the terminal default.
fn code_color(code: u8) -> Option<Color> {
    match code {
        b'p' => Some(Color::Green),
        b'e' => Some(Color::Red),
        b'x' => Some(Color::DarkGrey),
        _ => None,
    }
}

fn apply_color_into(out: &mut Vec<u8>, color: Option<Color>) -> Result<()> {
    match color {
        Some(c) => out.queue(SetForegroundColor(c))?,
        None => out.queue(ResetColor)?,
    };
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(surface: &Surface, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Option<Color>> = None;
    for y in 0..surface.height() {
        for &code in surface.row(y) {
            let color = code_color(code);
            if current != Some(color) {
                apply_color_into(out, color)?;
                current = Some(color);
            }
            out.queue(Print(decode_screen_code(code)))?;
        }
        if y + 1 < surface.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the runs of cells that changed between `prev` and `next`.
pub fn encode_diff_into(prev: &Surface, next: &Surface, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Option<Color>> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let row = next.row(y);
        for &code in &row[x as usize..(x + len) as usize] {
            let color = code_color(code);
            if current != Some(color) {
                apply_color_into(out, color)?;
                current = Some(color);
            }
            out.queue(Print(decode_screen_code(code)))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn for_each_changed_run(
    prev: &Surface,
    next: &Surface,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let (a, b) = (prev.row(y), next.row(y));
        let mut x = 0u16;
        while x < w {
            if a[x as usize] == b[x as usize] {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && a[x as usize] != b[x as usize] {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
