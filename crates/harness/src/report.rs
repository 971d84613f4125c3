//! Plain-text run report.
//!
//! Each measurement is written as soon as it is pushed, so a later failure
//! never swallows the tick counts already taken.

use std::io::Write;

use anyhow::Result;

use crate::measure::Measurement;

#[derive(Debug)]
pub struct Report<W: Write> {
    out: W,
    measurements: Vec<Measurement>,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            measurements: Vec::new(),
        }
    }

    /// Write `"<label>: <ticks> ticks"` and keep the measurement.
    pub fn push(&mut self, measurement: Measurement) -> Result<()> {
        writeln!(self.out, "{}", measurement)?;
        self.out.flush()?;
        self.measurements.push(measurement);
        Ok(())
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
