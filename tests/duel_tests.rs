//! End-to-end duel tests.
//!
//! These drive `Roulette` frame by frame with scripted rolls and a manual
//! clock, the way a host would, and check the narrated results.

use std::time::Duration;

use face_death::core::{GameConfig, GameRng, ManualClock, Phase, ScriptedRng, Side};
use face_death::games::roulette::{FrameInput, Roulette, TextBuffer, MSG_NPC_THINKING, MSG_RESTART_PROMPT};
use face_death::rules::MSG_NEW_GAME;

/// Build a duel whose reset draws `bullets` and gives the first move to
/// `first`, followed by the given shot rolls.
fn scripted<'a>(
    clock: &'a ManualClock,
    bullets: u32,
    first: Side,
    rolls: &[u32],
) -> Roulette<ScriptedRng, &'a ManualClock> {
    let coin = if first == Side::Player { 1 } else { 2 };
    let mut script = vec![bullets, coin];
    script.extend_from_slice(rolls);
    Roulette::with_parts(GameConfig::default(), ScriptedRng::new(script), clock)
}

/// Test a forced live roll on the player's shot.
#[test]
fn test_forced_hit_on_full_cylinder() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 5, Side::Player, &[3]);

    assert_eq!(game.state().bullets_remaining, 5);

    game.update(FrameInput::fire());

    let state = game.state();
    assert_eq!(state.life(Side::Player), 1);
    assert_eq!(state.life(Side::Npc), 2);
    assert_eq!(state.bullets_remaining, 4);
    assert_eq!(state.message, "BANG! You got hit...");
    assert_eq!(state.event_log.count("BANG! You got hit..."), 1);
    assert_eq!(state.event_log.len(), 2);
}

/// Test that a simultaneous knockout is a draw announced exactly once.
#[test]
fn test_double_knockout_is_single_draw() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 3, Side::Player, &[]);

    game.state_mut().life[Side::Player] = 0;
    game.state_mut().life[Side::Npc] = 0;

    for _ in 0..5 {
        game.update(FrameInput::idle());
    }

    let state = game.state();
    assert!(state.game_over);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(state.event_log.last(), Some("Game over... It's a draw"));
    assert_eq!(state.event_log.count("Game over... It's a draw"), 1);
    assert_eq!(state.message, MSG_RESTART_PROMPT);
}

/// Test that the NPC thinks for the full delay and then fires exactly once.
#[test]
fn test_npc_delay_is_polled() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 3, Side::Npc, &[5]);

    game.update(FrameInput::idle());
    assert_eq!(game.phase(), Phase::NpcThinking);
    assert_eq!(game.state().message, MSG_NPC_THINKING);

    for _ in 0..29 {
        clock.advance(Duration::from_millis(100));
        game.update(FrameInput::idle());
        assert!(game.state().waiting);
        assert!(!game.state().player_turn);
    }
    assert_eq!(game.rng_mut().draws(), 2);

    clock.advance(Duration::from_millis(100));
    game.update(FrameInput::idle());

    assert!(!game.state().waiting);
    assert!(game.state().player_turn);
    assert_eq!(game.rng_mut().draws(), 3);
    assert_eq!(game.state().event_log.count("Click! NPC survived..."), 1);

    for _ in 0..10 {
        clock.advance(Duration::from_secs(1));
        game.update(FrameInput::idle());
    }
    assert_eq!(game.rng_mut().draws(), 3);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

/// Test one full exchange: player clicks, NPC is hit, player moves again.
#[test]
fn test_full_exchange() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 2, Side::Player, &[4, 1]);

    game.update(FrameInput::fire());
    game.update(FrameInput::idle());
    clock.advance(Duration::from_secs(3));
    game.update(FrameInput::idle());

    let state = game.state();
    assert_eq!(state.life(Side::Player), 2);
    assert_eq!(state.life(Side::Npc), 1);
    assert_eq!(state.bullets_remaining, 1);
    assert!(state.player_turn);
    assert_eq!(
        state.event_log.iter().collect::<Vec<_>>(),
        vec![MSG_NEW_GAME, "Click! You survived...", "BANG! NPC got hit..."]
    );
}

/// Test that emptying the cylinder ends the duel in favour of the healthier side.
#[test]
fn test_empty_cylinder_ends_duel() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 1, Side::Player, &[1]);

    game.update(FrameInput::fire());
    assert_eq!(game.state().bullets_remaining, 0);

    game.update(FrameInput::idle());

    assert!(game.state().game_over);
    assert_eq!(game.state().event_log.last(), Some("Game over... NPC wins!"));
}

/// Test that nothing but restart moves a finished duel.
#[test]
fn test_game_over_is_frozen_until_restart() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 1, Side::Npc, &[1, 2, 1]);

    game.update(FrameInput::idle());
    clock.advance(Duration::from_secs(3));
    game.update(FrameInput::idle());
    game.update(FrameInput::idle());
    assert!(game.state().game_over);
    assert_eq!(game.state().event_log.last(), Some("Game over... You win!"));

    let frozen = game.state().clone();
    for _ in 0..5 {
        clock.advance(Duration::from_secs(5));
        game.update(FrameInput::fire());
    }
    assert_eq!(game.state().life, frozen.life);
    assert_eq!(game.state().bullets_remaining, frozen.bullets_remaining);
    assert_eq!(game.state().event_log, frozen.event_log);

    game.update(FrameInput::restart());

    let state = game.state();
    assert!(!state.game_over);
    assert_eq!(state.life(Side::Player), 2);
    assert_eq!(state.life(Side::Npc), 2);
    assert_eq!(state.bullets_remaining, 2);
    assert!(state.player_turn);
    assert_eq!(state.event_log.iter().collect::<Vec<_>>(), vec![MSG_NEW_GAME]);
    assert_eq!(state.games_played, 2);
}

/// Test the rendered overlay after a few events.
#[test]
fn test_render_overlay() {
    let clock = ManualClock::new();
    let mut game = scripted(&clock, 2, Side::Player, &[5]);

    game.update(FrameInput::fire());
    game.update(FrameInput::idle());

    let mut buffer = TextBuffer::new();
    game.render(&mut buffer);

    assert_eq!(
        buffer.to_string(),
        "Bullets left: 2/5\nNew game started!\nClick! You survived...\nNPC: Thinking..."
    );
}

/// Test that seeded duels always terminate under a trigger-happy player.
#[test]
fn test_seeded_duels_terminate() {
    for seed in 0..50u64 {
        let clock = ManualClock::new();
        let mut game = Roulette::with_parts(GameConfig::default(), GameRng::new(seed), &clock);

        let mut frames = 0;
        while game.phase() != Phase::GameOver && frames < 1_000 {
            clock.advance(Duration::from_secs(1));
            game.update(FrameInput::fire());
            frames += 1;
        }

        assert_eq!(game.phase(), Phase::GameOver, "seed {} never finished", seed);
        let state = game.state();
        assert!(state.side_down() || state.gun_empty());
    }
}
