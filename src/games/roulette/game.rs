//! Frame driver for the revolver duel.

use crate::core::{GameClock, GameConfig, GameRng, GameState, Phase, RandomSource, Side, SystemClock};
use crate::rules::{RouletteRules, RulesEngine};

use super::surface::TextSurface;

/// Status line while the player is to move.
pub const MSG_PLAYER_PROMPT: &str = "Player: Your turn! Press Space to pull the trigger.";

/// Status line while the NPC delay elapses.
pub const MSG_NPC_THINKING: &str = "NPC: Thinking...";

/// Status line once the duel is decided.
pub const MSG_RESTART_PROMPT: &str = "Press R to play again";

const TEXT_X: i32 = 10;
const HEADER_Y: i32 = 10;
const LOG_TOP_Y: i32 = 40;
const LINE_HEIGHT: i32 = 20;

/// Input consumed by one `update`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Pull the trigger (player's turn only).
    pub fire: bool,
    /// Start a new duel (game-over only).
    pub restart: bool,
}

impl FrameInput {
    /// No input this frame.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            fire: false,
            restart: false,
        }
    }

    /// The fire key is down.
    #[must_use]
    pub const fn fire() -> Self {
        Self {
            fire: true,
            restart: false,
        }
    }

    /// The restart key is down.
    #[must_use]
    pub const fn restart() -> Self {
        Self {
            fire: false,
            restart: true,
        }
    }
}

/// A running duel: rules, state, randomness and clock.
///
/// The host calls `update` then `render` once per frame.
pub struct Roulette<R = GameRng, C = SystemClock> {
    rules: RouletteRules,
    state: GameState,
    rng: R,
    clock: C,
}

impl Roulette<GameRng, SystemClock> {
    /// Start a duel on the wall clock.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_parts(config, rng, SystemClock::new())
    }
}

impl<R: RandomSource, C: GameClock> Roulette<R, C> {
    /// Start a duel with an explicit random source and clock.
    ///
    /// The first game is reset immediately.
    #[must_use]
    pub fn with_parts(config: GameConfig, mut rng: R, clock: C) -> Self {
        let rules = RouletteRules::new(config);
        let state = rules.new_game(&mut rng);
        Self {
            rules,
            state,
            rng,
            clock,
        }
    }

    /// Get the rules.
    #[must_use]
    pub fn rules(&self) -> &RouletteRules {
        &self.rules
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the state for direct manipulation (setup, debugging).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Get the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Start a new duel now.
    pub fn reset(&mut self) {
        self.rules.reset_game(&mut self.state, &mut self.rng);
    }

    /// Advance the duel by one frame.
    ///
    /// Never blocks: the NPC delay is re-checked against the clock on every
    /// call.
    pub fn update(&mut self, input: FrameInput) {
        let now = self.clock.now();

        self.rules.end_game(&mut self.state);

        if self.state.game_over {
            self.state.set_message(MSG_RESTART_PROMPT);
            if input.restart {
                self.reset();
            }
            return;
        }

        if self.state.waiting {
            let started = *self.state.turn_timer_start.get_or_insert(now);
            let elapsed = now.saturating_sub(started);
            if elapsed >= self.rules.config().npc_delay() {
                self.state.waiting = false;
                self.state.turn_timer_start = None;
                self.rules.npc_turn(&mut self.state, &mut self.rng);
                log::debug!("Phase -> {}", self.state.phase());
            } else {
                log::trace!("NPC thinking: {:?} elapsed", elapsed);
            }
            return;
        }

        if self.state.player_turn {
            self.state.set_message(MSG_PLAYER_PROMPT);
            if input.fire {
                self.state.player_turn = false;
                self.rules.resolve_shot(&mut self.state, Side::Player, &mut self.rng);
            }
        } else {
            self.state.set_message(MSG_NPC_THINKING);
            self.state.waiting = true;
            self.state.turn_timer_start = Some(now);
            log::debug!("Phase -> {}", self.state.phase());
        }
    }

    /// Draw the overlay: bullets readout, event log, status message.
    ///
    /// Reads the state only.
    pub fn render<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        let header = format!(
            "Bullets left: {}/{}",
            self.state.bullets_remaining,
            self.rules.config().drum_size
        );
        surface.draw_text(&header, TEXT_X, HEADER_Y);

        let mut y = LOG_TOP_Y;
        for entry in self.state.event_log.iter() {
            surface.draw_text(entry, TEXT_X, y);
            y += LINE_HEIGHT;
        }

        surface.draw_text(&self.state.message, TEXT_X, y + LINE_HEIGHT);
    }
}
