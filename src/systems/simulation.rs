//! Simulation system
//!
//! Owns the world of tesseracts and the frame clock, and runs one frame:
//! - Delta time calculation
//! - Rotation of every tesseract
//! - Handing the projected segments to the render system

use std::time::Instant;
use tesseract4d_core::{Clock, FixedClock, TesseractError, TesseractKey, World};

use crate::config::{SimulationConfig, TesseractConfig};
use crate::systems::render::{RenderStats, RenderSystem};

/// Wall-clock frame timer
///
/// Reports the time since the previous read, capped so a stall (first frame,
/// a debugger pause) does not turn into one huge rotation step.
pub struct WallClock {
    last_frame: Instant,
    max_delta: f32,
}

impl WallClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
        }
    }
}

impl Clock for WallClock {
    fn elapsed_time(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        raw_dt.min(self.max_delta)
    }
}

/// Result of a simulation update
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationResult {
    /// Elapsed time used for this frame
    pub elapsed_time: f32,
    /// Segment counts summed over all tesseracts
    pub render: RenderStats,
}

/// Drives every tesseract once per frame
pub struct SimulationSystem {
    world: World,
    clock: Box<dyn Clock>,
    frame: u64,
}

impl SimulationSystem {
    /// Create the world from configuration
    pub fn new(
        tesseracts: &[TesseractConfig],
        simulation: &SimulationConfig,
    ) -> Result<Self, TesseractError> {
        let mut world = World::new();
        for t in tesseracts {
            let key = world.spawn(t.edge_length, t.rotation_speed, t.rotation_mode.to_rotation_mode())?;
            log::info!(
                "Spawned tesseract {:?}: edge length {}, {} deg/s, {:?}",
                key,
                t.edge_length,
                t.rotation_speed,
                t.rotation_mode
            );
        }

        let clock: Box<dyn Clock> = match simulation.fixed_delta {
            Some(dt) => Box::new(FixedClock::new(dt)),
            None => Box::new(WallClock::new(simulation.max_delta)),
        };

        Ok(Self {
            world,
            clock,
            frame: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Keys of all tesseracts being simulated
    pub fn keys(&self) -> Vec<TesseractKey> {
        self.world.iter().map(|(key, _)| key).collect()
    }

    /// Number of frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one simulation frame
    ///
    /// 1. Read the elapsed time from the clock
    /// 2. Rotate every tesseract
    /// 3. Project and hand the segments to the render system
    pub fn update(&mut self, render: &mut RenderSystem) -> SimulationResult {
        let elapsed_time = self.clock.elapsed_time();
        self.world.advance_all(elapsed_time);
        let render = render.render(&self.world);
        self.frame += 1;

        SimulationResult {
            elapsed_time,
            render,
        }
    }
}
