//! Array-of-structs baseline engine.
//!
//! No lookup tables: the screen offset is `y * stride + x` and the digits come
//! from `/ 10` and `% 10`.

use anyhow::Result;

use crate::core::EntityRecords;
use crate::simulation::{check_surface, Simulation};
use crate::term::{draw_record, Surface};
use crate::types::EntityIndex;

#[derive(Debug, Clone, Default)]
pub struct AosEngine {
    records: EntityRecords,
}

impl AosEngine {
    pub fn new(surface: &Surface) -> Result<Self> {
        check_surface(surface)?;
        Ok(Self::default())
    }

    pub fn records(&self) -> &EntityRecords {
        &self.records
    }
}

impl Simulation for AosEngine {
    const NAME: &'static str = "aos";

    fn reset(&mut self) {
        self.records.initialize();
    }

    fn frame(&mut self, surface: &mut Surface) {
        for index in EntityIndex::enemies() {
            self.records.tick(index);
            draw_record(surface, self.records.get(index));
        }
        draw_record(surface, self.records.get(EntityIndex::PLAYER));
    }
}
