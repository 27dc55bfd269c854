//! tesseract4d - headless driver
//!
//! Spins the configured tesseracts once per frame and keeps their line
//! buffers up to date.

use std::time::{Duration, Instant};

use tesseract4d::config::AppConfig;
use tesseract4d::systems::{RenderSystem, SimulationSystem};

fn main() {
    // Config comes first so it can pick the log level
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting tesseract4d");

    let mut simulation = SimulationSystem::new(&config.tesseracts, &config.simulation)
        .unwrap_or_else(|e| panic!("Failed to build tesseracts: {}", e));
    let mut render = RenderSystem::new(config.rendering.clone());

    let frame_budget = if config.simulation.target_fps > 0.0 {
        Duration::from_secs_f32(1.0 / config.simulation.target_fps)
    } else {
        Duration::ZERO
    };

    let mut skipped_total = 0usize;
    while config.simulation.frames == 0 || simulation.frame() < config.simulation.frames {
        let start = Instant::now();

        let result = simulation.update(&mut render);
        skipped_total += result.render.skipped;

        if let Some(rest) = frame_budget.checked_sub(start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!(
        "Finished after {} frames ({} segments skipped)",
        simulation.frame(),
        skipped_total
    );
}
