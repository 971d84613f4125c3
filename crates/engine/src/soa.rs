//! Structure-of-arrays engine with table-driven drawing.

use anyhow::Result;
use log::debug;

use crate::core::EntityStore;
use crate::simulation::{check_surface, Simulation};
use crate::term::{draw_entity, LookupTables, Surface};
use crate::types::EntityIndex;

#[derive(Debug, Clone)]
pub struct SoaEngine {
    store: EntityStore,
    tables: LookupTables,
}

impl SoaEngine {
    /// Build lookup tables for `surface` and place every entity.
    pub fn new(surface: &Surface) -> Result<Self> {
        check_surface(surface)?;
        let tables = LookupTables::new(surface.stride(), surface.height() as usize)?;
        debug!("soa: lookup tables verified for {} rows", tables.rows());
        Ok(Self {
            store: EntityStore::new(),
            tables,
        })
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }
}

impl Simulation for SoaEngine {
    const NAME: &'static str = "soa";

    fn reset(&mut self) {
        self.store.initialize();
    }

    #[inline]
    fn frame(&mut self, surface: &mut Surface) {
        for index in EntityIndex::enemies() {
            self.store.tick(index);
            draw_entity(surface, &self.tables, &self.store, index);
        }
        draw_entity(surface, &self.tables, &self.store, EntityIndex::PLAYER);
    }
}
