//! # face-death
//!
//! A turn-based revolver duel: the player and an NPC take turns pulling the
//! trigger of one shared cylinder until someone runs out of life or the
//! cylinder runs out of live rounds.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The host calls `update` then `render` once per frame.
//!    Nothing in the library blocks or sleeps; the NPC delay is polled.
//!
//! 2. **Injectable Randomness and Time**: Rules draw through
//!    `RandomSource` and the driver reads a `GameClock`, so every outcome
//!    can be forced in tests.
//!
//! 3. **Configuration Over Constants**: Drum size, life points, delay and
//!    load floor come from `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Sides, configuration, RNG, clocks, event log, state
//! - `rules`: `RulesEngine` trait and the standard `RouletteRules`
//! - `games`: The per-frame `Roulette` driver and text overlay

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    GameConfig, LoadFloor, ConfigError,
    EventLog,
    GameClock, SystemClock, ManualClock,
    GameState, Phase,
};

pub use crate::rules::{GameResult, RouletteRules, RulesEngine, ShotOutcome};

pub use crate::games::roulette::{FrameInput, Roulette, TextBuffer, TextSurface};
