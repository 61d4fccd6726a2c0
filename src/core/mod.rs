//! Core types: sides, configuration, RNG, clocks, event log, state.
//!
//! This module holds the data the duel runs on. Rules in `rules` and the
//! frame driver in `games` operate on these types.

pub mod side;
pub mod rng;
pub mod config;
pub mod event_log;
pub mod time;
pub mod state;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{ConfigError, GameConfig, LoadFloor, BULLET_DRUM, LIFE_POINTS, NPC_DELAY_MS};
pub use event_log::EventLog;
pub use time::{GameClock, ManualClock, SystemClock};
pub use state::{GameState, Phase};
