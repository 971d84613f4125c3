//! Structure-of-arrays engine driven by a scoped index cursor.
//!
//! Instead of passing the entity index to each helper, one frame pass holds a
//! single "current index" that `damage` and `draw` both read. The cursor lives in
//! a [`FramePass`] created at the start of [`Simulation::frame`] and dropped at
//! its end; it is never visible outside this module.

use anyhow::Result;
use log::debug;

use crate::core::EntityStore;
use crate::simulation::{check_surface, Simulation};
use crate::term::{draw_entity, LookupTables, Surface};
use crate::types::EntityIndex;

#[derive(Debug, Clone)]
pub struct CursorEngine {
    store: EntityStore,
    tables: LookupTables,
}

impl CursorEngine {
    pub fn new(surface: &Surface) -> Result<Self> {
        check_surface(surface)?;
        let tables = LookupTables::new(surface.stride(), surface.height() as usize)?;
        debug!("cursor: lookup tables verified for {} rows", tables.rows());
        Ok(Self {
            store: EntityStore::new(),
            tables,
        })
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }
}

/// One frame's update pass.
struct FramePass<'a> {
    store: &'a mut EntityStore,
    tables: &'a LookupTables,
    surface: &'a mut Surface,
    cursor: EntityIndex,
}

impl FramePass<'_> {
    #[inline(always)]
    fn damage(&mut self) {
        self.store.tick(self.cursor);
    }

    #[inline(always)]
    fn draw(&mut self) {
        draw_entity(&mut *self.surface, self.tables, &*self.store, self.cursor);
    }

    #[inline]
    fn run(mut self) {
        for index in EntityIndex::enemies() {
            self.cursor = index;
            self.damage();
            self.draw();
        }
        self.cursor = EntityIndex::PLAYER;
        self.draw();
    }
}

impl Simulation for CursorEngine {
    const NAME: &'static str = "cursor";

    fn reset(&mut self) {
        self.store.initialize();
    }

    fn frame(&mut self, surface: &mut Surface) {
        FramePass {
            store: &mut self.store,
            tables: &self.tables,
            surface,
            cursor: EntityIndex::PLAYER,
        }
        .run();
    }
}
