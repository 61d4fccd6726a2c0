//! Rules engine for the duel.
//!
//! `RulesEngine` defines:
//! - How the cylinder is loaded on a new game
//! - How a single trigger pull resolves
//! - When the duel is over and who won
//!
//! `RouletteRules` is the bullets-decrementing policy: every live round
//! fired leaves the shared cylinder, whoever pulled the trigger.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, RandomSource, Side};

/// Status line shown after a reset.
pub const MSG_NEW_GAME: &str = "New game started!";

/// Result of a completed duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The side with strictly more life left.
    Winner(Side),
    /// Equal life totals.
    Draw,
}

impl GameResult {
    /// Decide the result from remaining life: more life wins, equal draws.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let player = state.life(Side::Player);
        let npc = state.life(Side::Npc);

        match player.cmp(&npc) {
            std::cmp::Ordering::Equal => GameResult::Draw,
            std::cmp::Ordering::Greater => GameResult::Winner(Side::Player),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Npc),
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// Summary appended to the event log.
    #[must_use]
    pub fn announcement(&self) -> &'static str {
        match self {
            GameResult::Draw => "Game over... It's a draw",
            GameResult::Winner(Side::Player) => "Game over... You win!",
            GameResult::Winner(Side::Npc) => "Game over... NPC wins!",
        }
    }
}

/// Outcome of one trigger pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Live round: the shooter loses a life point.
    Hit(Side),
    /// Empty chamber.
    Click(Side),
}

impl ShotOutcome {
    /// Who pulled the trigger.
    #[must_use]
    pub fn shooter(&self) -> Side {
        match self {
            ShotOutcome::Hit(side) | ShotOutcome::Click(side) => *side,
        }
    }

    /// True for a live round.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_))
    }

    /// Narration appended to the event log.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ShotOutcome::Hit(Side::Player) => "BANG! You got hit...",
            ShotOutcome::Hit(Side::Npc) => "BANG! NPC got hit...",
            ShotOutcome::Click(Side::Player) => "Click! You survived...",
            ShotOutcome::Click(Side::Npc) => "Click! NPC survived...",
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `reset_game`: Must fully rebuild the state; it is the only way out of
///   game-over
/// - `resolve_shot`: Return `None` and leave the state untouched when no
///   shot can be fired
/// - `is_terminal`: Return `None` if the duel continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Start a new duel in place.
    fn reset_game<R: RandomSource + ?Sized>(&self, state: &mut GameState, rng: &mut R);

    /// Pull the trigger once for `shooter`.
    fn resolve_shot<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        shooter: Side,
        rng: &mut R,
    ) -> Option<ShotOutcome>;

    /// Check if the duel is decided.
    ///
    /// Returns `Some(result)` if it has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Resolve the NPC's shot, then hand the turn back to the player.
    fn npc_turn<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        rng: &mut R,
    ) -> Option<ShotOutcome> {
        let outcome = self.resolve_shot(state, Side::Npc, rng);
        state.player_turn = true;
        outcome
    }

    /// Mark the duel over if it is decided and announce the result.
    ///
    /// Returns the result only on the call that ends the duel; later calls
    /// return `None`, so the summary is logged exactly once.
    fn end_game(&self, state: &mut GameState) -> Option<GameResult> {
        if state.game_over {
            return None;
        }
        let result = self.is_terminal(state)?;

        state.game_over = true;
        state.waiting = false;
        state.turn_timer_start = None;
        state.announce(result.announcement());
        log::info!(
            "{} (player life {}, npc life {}, bullets left {})",
            result.announcement(),
            state.life(Side::Player),
            state.life(Side::Npc),
            state.bullets_remaining
        );
        Some(result)
    }
}

/// Standard revolver duel rules.
#[derive(Clone, Debug, Default)]
pub struct RouletteRules {
    config: GameConfig,
}

impl RouletteRules {
    /// Create rules from a configuration.
    ///
    /// Panics if the configuration is not playable; call
    /// `GameConfig::validate` first to handle that as an error.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{}", err);
        }
        Self { config }
    }

    /// Build a fresh, already-reset state.
    #[must_use]
    pub fn new_game<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GameState {
        let mut state = GameState::new(self.config.life_points, 0);
        self.reset_game(&mut state, rng);
        state
    }
}

impl RulesEngine for RouletteRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn reset_game<R: RandomSource + ?Sized>(&self, state: &mut GameState, rng: &mut R) {
        let (low, high) = self.config.load_range();

        state.life.fill(self.config.life_points);
        state.bullets_remaining = rng.gen_inclusive(low, high);
        state.player_turn = rng.coin_flip();
        state.game_over = false;
        state.waiting = false;
        state.turn_timer_start = None;
        state.event_log.clear();
        state.announce(MSG_NEW_GAME);
        state.games_played += 1;

        log::info!(
            "New game #{}: {}/{} live chambers, {} moves first",
            state.games_played,
            state.bullets_remaining,
            self.config.drum_size,
            if state.player_turn { Side::Player } else { Side::Npc }
        );
    }

    fn resolve_shot<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        shooter: Side,
        rng: &mut R,
    ) -> Option<ShotOutcome> {
        if state.game_over || state.gun_empty() || state.side_down() {
            log::debug!("{} pulled the trigger with no shot to resolve", shooter);
            return None;
        }

        let roll = rng.gen_inclusive(1, self.config.drum_size);
        let outcome = if roll <= state.bullets_remaining {
            state.life[shooter] -= 1;
            state.bullets_remaining -= 1;
            ShotOutcome::Hit(shooter)
        } else {
            ShotOutcome::Click(shooter)
        };

        log::debug!(
            "{} rolled {} against {} live: {}",
            shooter,
            roll,
            state.bullets_remaining + u32::from(outcome.is_hit()),
            outcome.message()
        );
        state.announce(outcome.message());
        Some(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.side_down() || state.gun_empty() {
            Some(GameResult::from_state(state))
        } else {
            None
        }
    }
}
