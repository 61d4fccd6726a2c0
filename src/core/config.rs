//! Game configuration.
//!
//! `GameConfig` fixes the rules of a duel at startup:
//! - `drum_size`: chambers in the cylinder
//! - `life_points`: hits each side can take
//! - `npc_delay_ms`: how long the NPC "thinks" before firing
//! - `load_floor`: lower bound of the live-chamber draw on reset
//! - `seed`: optional fixed seed for reproducible games
//!
//! The struct is serde-friendly so hosts can layer it from files and the
//! environment, and exposes `with_*` builders for code.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Chambers in the cylinder.
pub const BULLET_DRUM: u32 = 5;

/// Starting life for each side.
pub const LIFE_POINTS: u32 = 2;

/// NPC thinking delay in milliseconds.
pub const NPC_DELAY_MS: u64 = 3_000;

/// Lower bound used when loading the cylinder on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFloor {
    /// At least one live chamber.
    #[default]
    One,
    /// At least as many live chambers as a side has life points.
    LifePoints,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Chambers in the cylinder (the upper bound of every roll).
    pub drum_size: u32,

    /// Life points each side starts with.
    pub life_points: u32,

    /// NPC thinking delay in milliseconds.
    pub npc_delay_ms: u64,

    /// Lower bound of the live-chamber draw.
    pub load_floor: LoadFloor,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drum_size: BULLET_DRUM,
            life_points: LIFE_POINTS,
            npc_delay_ms: NPC_DELAY_MS,
            load_floor: LoadFloor::One,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the cylinder size.
    #[must_use]
    pub fn with_drum_size(mut self, drum_size: u32) -> Self {
        self.drum_size = drum_size;
        self
    }

    /// Set the starting life points.
    #[must_use]
    pub fn with_life_points(mut self, life_points: u32) -> Self {
        self.life_points = life_points;
        self
    }

    /// Set the NPC thinking delay.
    #[must_use]
    pub fn with_npc_delay(mut self, delay: Duration) -> Self {
        self.npc_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the load floor.
    #[must_use]
    pub fn with_load_floor(mut self, floor: LoadFloor) -> Self {
        self.load_floor = floor;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The NPC thinking delay as a `Duration`.
    #[must_use]
    pub fn npc_delay(&self) -> Duration {
        Duration::from_millis(self.npc_delay_ms)
    }

    /// Inclusive range the live-chamber count is drawn from on reset.
    #[must_use]
    pub fn load_range(&self) -> (u32, u32) {
        let low = match self.load_floor {
            LoadFloor::One => 1,
            LoadFloor::LifePoints => self.life_points,
        };
        (low, self.drum_size)
    }

    /// Check that the configuration describes a playable duel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drum_size == 0 {
            return Err(ConfigError::Invalid("drum_size must be at least 1".into()));
        }
        if self.life_points == 0 {
            return Err(ConfigError::Invalid("life_points must be at least 1".into()));
        }
        let (low, high) = self.load_range();
        if low > high {
            return Err(ConfigError::Invalid(format!(
                "load floor {low} exceeds drum_size {high}"
            )));
        }
        Ok(())
    }
}

/// Error raised while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Values that cannot describe a playable duel.
    Invalid(String),
    /// The configuration sources could not be read or parsed.
    Load(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::Load(msg) => write!(f, "Configuration load error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(err.to_string())
    }
}
