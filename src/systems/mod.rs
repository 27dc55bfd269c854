//! Application systems
//!
//! The frame loop is split into a simulation step and a render step.

pub mod render;
pub mod simulation;

pub use render::{LineSet, RenderStats, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem, WallClock};
