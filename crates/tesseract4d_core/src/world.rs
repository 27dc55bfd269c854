//! World container for several independent tesseracts
//!
//! Each entry is a full [`TesseractEngine`] with its own vertex array, edge
//! list and rotation speed. Advancing one never touches another.

use slotmap::{new_key_type, SlotMap};

use crate::engine::TesseractEngine;
use crate::error::TesseractError;
use crate::rotation::RotationMode;

new_key_type! {
    /// Key to a tesseract in the world
    ///
    /// Generational: a key to a removed tesseract returns None instead of
    /// pointing at whatever reuses its slot.
    pub struct TesseractKey;
}

/// The set of tesseract engines driven together by one clock
#[derive(Default)]
pub struct World {
    engines: SlotMap<TesseractKey, TesseractEngine>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            engines: SlotMap::with_key(),
        }
    }

    /// Build, initialize and add an engine, returning its key
    ///
    /// Nothing is added if initialization fails.
    pub fn spawn(
        &mut self,
        edge_length: f32,
        rotation_speed: f32,
        mode: RotationMode,
    ) -> Result<TesseractKey, TesseractError> {
        let mut engine = TesseractEngine::new()
            .with_rotation_speed(rotation_speed)
            .with_rotation_mode(mode);
        engine.initialize(edge_length)?;
        Ok(self.add(engine))
    }

    /// Add an existing engine, returning its key
    ///
    /// An engine that is still `Uninitialized` is held but skipped by
    /// [`advance_all`](Self::advance_all) and [`ready`](Self::ready) until it
    /// is initialized through [`get_mut`](Self::get_mut).
    pub fn add(&mut self, engine: TesseractEngine) -> TesseractKey {
        self.engines.insert(engine)
    }

    /// Remove an engine and return it
    pub fn remove(&mut self, key: TesseractKey) -> Option<TesseractEngine> {
        self.engines.remove(key)
    }

    pub fn get(&self, key: TesseractKey) -> Option<&TesseractEngine> {
        self.engines.get(key)
    }

    pub fn get_mut(&mut self, key: TesseractKey) -> Option<&mut TesseractEngine> {
        self.engines.get_mut(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Iterate over all engines with their keys
    pub fn iter(&self) -> impl Iterator<Item = (TesseractKey, &TesseractEngine)> + '_ {
        self.engines.iter()
    }

    /// Iterate over the engines that have been initialized
    pub fn ready(&self) -> impl Iterator<Item = (TesseractKey, &TesseractEngine)> + '_ {
        self.engines.iter().filter(|(_, engine)| engine.is_ready())
    }

    /// Advance every initialized engine by the same elapsed time
    pub fn advance_all(&mut self, elapsed_time: f32) {
        for engine in self.engines.values_mut().filter(|e| e.is_ready()) {
            engine.advance(elapsed_time);
        }
    }
}
