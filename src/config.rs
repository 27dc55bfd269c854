//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use tesseract4d_core::RotationMode;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tesseracts to spin, each independent of the others
    #[serde(default = "default_tesseracts")]
    pub tesseracts: Vec<TesseractConfig>,
    /// Frame loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Line rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

fn default_tesseracts() -> Vec<TesseractConfig> {
    vec![TesseractConfig::default()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tesseracts: default_tesseracts(),
            simulation: SimulationConfig::default(),
            rendering: RenderingConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // T4D_SIMULATION__FRAMES=10 -> simulation.frames = 10
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot build geometry from
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, t) in self.tesseracts.iter().enumerate() {
            if !t.edge_length.is_finite() {
                return Err(ConfigError::invalid(format!(
                    "tesseracts[{}].edge_length must be finite, got {}",
                    i, t.edge_length
                )));
            }
            if !t.rotation_speed.is_finite() {
                return Err(ConfigError::invalid(format!(
                    "tesseracts[{}].rotation_speed must be finite, got {}",
                    i, t.rotation_speed
                )));
            }
        }
        if self.simulation.max_delta < 0.0 {
            return Err(ConfigError::invalid("simulation.max_delta must be non-negative"));
        }
        if matches!(self.simulation.fixed_delta, Some(dt) if dt < 0.0) {
            return Err(ConfigError::invalid("simulation.fixed_delta must be non-negative"));
        }
        Ok(())
    }
}

/// One tesseract's geometry and spin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseractConfig {
    /// Length of each edge (zero or negative gives degenerate geometry)
    pub edge_length: f32,
    /// Rotation speed in degrees per second
    pub rotation_speed: f32,
    /// How per-frame rotation is applied
    pub rotation_mode: RotationModeConfig,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            edge_length: 1.0,
            rotation_speed: 20.0,
            rotation_mode: RotationModeConfig::default(),
        }
    }
}

/// Serializable mirror of [`RotationMode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationModeConfig {
    /// Rotate the already-rotated vertices each frame
    #[default]
    Incremental,
    /// Rotate the original vertices by the accumulated angle
    Absolute,
}

impl RotationModeConfig {
    /// Convert to the engine's rotation mode
    pub fn to_rotation_mode(self) -> RotationMode {
        match self {
            RotationModeConfig::Incremental => RotationMode::Incremental,
            RotationModeConfig::Absolute => RotationMode::Absolute,
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frames to run before exiting (0 = run until killed)
    pub frames: u64,
    /// Frame rate the loop paces itself to
    pub target_fps: f32,
    /// Cap on a single frame's elapsed time, in seconds
    pub max_delta: f32,
    /// Use a constant elapsed time instead of the wall clock
    pub fixed_delta: Option<f32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            target_fps: 60.0,
            max_delta: 0.25,
            fixed_delta: None,
        }
    }
}

/// Line rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Width multiplier for every edge line
    pub line_width: f32,
    /// Log a line-buffer summary every N frames (0 = never)
    pub report_interval: u64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            line_width: 0.05,
            report_interval: 60,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
