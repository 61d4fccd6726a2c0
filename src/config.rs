//! Host configuration
//!
//! Configuration is loaded from the following sources (lowest to highest priority):
//! 1. Built-in defaults (`#[serde(default)]`)
//! 2. `face-death.toml` in the working directory (optional)
//! 3. Environment variables (`FACE_DEATH_SECTION__KEY`)

use std::path::Path;
use std::time::Duration;

use face_death::core::{ConfigError, GameConfig};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Default config file name.
pub const CONFIG_FILE: &str = "face-death.toml";

/// Default environment prefix.
pub const ENV_PREFIX: &str = "FACE_DEATH_";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Duel rules
    #[serde(default)]
    pub game: GameConfig,
    /// Terminal host settings
    #[serde(default)]
    pub host: HostConfig,
}

impl AppConfig {
    /// Load configuration from the default file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(CONFIG_FILE, ENV_PREFIX)
    }

    /// Load configuration from a specific file and environment prefix.
    ///
    /// A missing file is not an error. The result is validated.
    pub fn load_with<P: AsRef<Path>>(path: P, env_prefix: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut figment = Figment::new();

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        // FACE_DEATH_GAME__LIFE_POINTS=3 -> game.life_points = 3
        figment = figment.merge(Env::prefixed(env_prefix).split("__"));

        let config: AppConfig = figment.extract()?;
        config.game.validate()?;
        Ok(config)
    }
}

/// Terminal host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Frames per second of the update/render loop
    pub frame_rate: u32,
    /// Fire automatically on every player turn and exit after one duel
    pub autoplay: bool,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            autoplay: false,
            log_level: "info".to_string(),
        }
    }
}

impl HostConfig {
    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
