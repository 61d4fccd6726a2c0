//! Duel state.
//!
//! ## GameState
//!
//! Everything that changes during a duel:
//! - Live chambers left in the shared cylinder
//! - Life totals per side
//! - The latest message and the event log
//! - Turn, waiting and game-over flags, plus the NPC delay timer
//!
//! The state holds data only. Transitions live in `rules::engine` and the
//! per-frame driver in `games::roulette`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::event_log::EventLog;
use super::side::{Side, SideMap};

/// Phase of the duel, derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// NPC to move, delay not yet started.
    TurnWait,
    /// Waiting for the player to pull the trigger.
    PlayerTurn,
    /// NPC thinking delay is elapsing.
    NpcThinking,
    /// Duel decided; only a restart is accepted.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::TurnWait => "turn-wait",
            Phase::PlayerTurn => "player-turn",
            Phase::NpcThinking => "npc-thinking",
            Phase::GameOver => "game-over",
        };
        f.write_str(name)
    }
}

/// Complete duel state.
///
/// Cloning is cheap: the event log is a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Live chambers left in the cylinder.
    pub bullets_remaining: u32,

    /// Life points per side.
    pub life: SideMap<u32>,

    /// Latest narrated event, shown under the log.
    pub message: String,

    /// History of distinct consecutive messages.
    pub event_log: EventLog,

    /// True while it is the player's turn.
    pub player_turn: bool,

    /// Terminal flag.
    pub game_over: bool,

    /// True while the NPC thinking delay is elapsing.
    pub waiting: bool,

    /// Clock reading taken when the thinking delay started.
    pub turn_timer_start: Option<Duration>,

    /// Resets performed so far.
    pub games_played: u32,
}

impl GameState {
    /// Create a state with full lives and `bullets` live chambers.
    ///
    /// The player moves first and the log is empty. Drivers normally
    /// follow this with `rules::reset_game`.
    #[must_use]
    pub fn new(life_points: u32, bullets: u32) -> Self {
        Self {
            bullets_remaining: bullets,
            life: SideMap::with_value(life_points),
            message: String::new(),
            event_log: EventLog::new(),
            player_turn: true,
            game_over: false,
            waiting: false,
            turn_timer_start: None,
            games_played: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.waiting {
            Phase::NpcThinking
        } else if self.player_turn {
            Phase::PlayerTurn
        } else {
            Phase::TurnWait
        }
    }

    /// Life points of one side.
    #[must_use]
    pub fn life(&self, side: Side) -> u32 {
        self.life[side]
    }

    /// True when the cylinder has no live chambers left.
    #[must_use]
    pub fn gun_empty(&self) -> bool {
        self.bullets_remaining == 0
    }

    /// True when either side is out of life.
    #[must_use]
    pub fn side_down(&self) -> bool {
        Side::all().any(|side| self.life[side] == 0)
    }

    /// Replace the status message without touching the log.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Set the status message and append it to the log.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.event_log.push(self.message.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(2, 5);

        assert_eq!(state.bullets_remaining, 5);
        assert_eq!(state.life(Side::Player), 2);
        assert_eq!(state.life(Side::Npc), 2);
        assert!(state.event_log.is_empty());
        assert_eq!(state.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn test_phase_priority() {
        let mut state = GameState::new(2, 5);

        state.player_turn = false;
        assert_eq!(state.phase(), Phase::TurnWait);

        state.waiting = true;
        assert_eq!(state.phase(), Phase::NpcThinking);

        state.game_over = true;
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn test_terminal_conditions() {
        let mut state = GameState::new(2, 1);
        assert!(!state.gun_empty());
        assert!(!state.side_down());

        state.bullets_remaining = 0;
        assert!(state.gun_empty());

        state.life[Side::Npc] = 0;
        assert!(state.side_down());
    }

    #[test]
    fn test_announce_logs_once() {
        let mut state = GameState::new(2, 5);

        state.announce("New game started!");
        state.announce("New game started!");
        assert_eq!(state.event_log.len(), 1);

        state.set_message("Press R to play again");
        assert_eq!(state.message, "Press R to play again");
        assert_eq!(state.event_log.len(), 1);
    }

    #[test]
    fn test_snapshot_serde() {
        let mut state = GameState::new(2, 3);
        state.announce("New game started!");
        state.waiting = true;
        state.turn_timer_start = Some(Duration::from_millis(1200));

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, restored);
    }
}
