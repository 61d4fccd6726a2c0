//! Duel rules.
//!
//! Rules implement `RulesEngine` to define:
//! - How a new game loads the cylinder
//! - How one trigger pull resolves
//! - Win/draw conditions
//!
//! The per-frame driver calls into `RulesEngine` and never decides hits
//! or winners itself.

pub mod engine;

pub use engine::{GameResult, RouletteRules, RulesEngine, ShotOutcome, MSG_NEW_GAME};
