//! face-death - terminal host for the revolver duel
//!
//! Owns the frame loop, the clock and stdin. Type a command and press Enter:
//! - empty line, `f`, `fire`, `space`: pull the trigger
//! - `r`, `restart`: start a new duel after game over
//! - `q`, `quit`: exit

mod config;

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use face_death::core::Phase;
use face_death::games::roulette::{FrameInput, Roulette, TextBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};

use config::AppConfig;

/// A line of terminal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Fire,
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "f" | "fire" | "space" => Some(Command::Fire),
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Read stdin on its own thread so the frame loop never blocks on input.
fn spawn_input_reader() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        return;
                    }
                }
                None => log::warn!("Unknown command {:?} (f = fire, r = restart, q = quit)", line.trim()),
            }
        }
        // EOF ends the session
        let _ = tx.send(Command::Quit);
    });

    rx
}

/// Collect this frame's input. Returns `None` when the session should end.
fn drain_input(rx: &Receiver<Command>) -> Option<FrameInput> {
    let mut input = FrameInput::idle();
    loop {
        match rx.try_recv() {
            Ok(Command::Fire) => input.fire = true,
            Ok(Command::Restart) => input.restart = true,
            Ok(Command::Quit) | Err(TryRecvError::Disconnected) => return None,
            Err(TryRecvError::Empty) => return Some(input),
        }
    }
}

fn print_frame(frame: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(out, "{}", frame)?;
    out.flush()
}

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.host.log_level.as_str()))
        .init();
    if let Some(err) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", err);
    }
    log::info!(
        "Starting face-death ({}x{} overlay, {} fps{})",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        config.host.frame_rate,
        if config.host.autoplay { ", autoplay" } else { "" }
    );

    let autoplay = config.host.autoplay;
    let frame_duration = config.host.frame_duration();
    let input = (!autoplay).then(spawn_input_reader);

    let mut game = Roulette::new(config.game);
    let mut buffer = TextBuffer::new();
    let mut last_frame = String::new();

    loop {
        let frame_input = match &input {
            Some(rx) => match drain_input(rx) {
                Some(frame_input) => frame_input,
                None => break,
            },
            None => FrameInput {
                fire: game.phase() == Phase::PlayerTurn,
                restart: false,
            },
        };

        game.update(frame_input);

        buffer.clear();
        game.render(&mut buffer);
        let frame = buffer.to_string();
        if frame != last_frame {
            if let Err(err) = print_frame(&frame) {
                log::error!("Failed to write frame: {}", err);
                break;
            }
            last_frame = frame;
        }

        if autoplay && game.phase() == Phase::GameOver {
            break;
        }

        thread::sleep(frame_duration);
    }

    log::info!("Played {} game(s)", game.state().games_played);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(""), Some(Command::Fire));
        assert_eq!(parse_command("  F "), Some(Command::Fire));
        assert_eq!(parse_command("space"), Some(Command::Fire));
        assert_eq!(parse_command("R"), Some(Command::Restart));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn test_drain_input_merges_commands() {
        let (tx, rx) = mpsc::channel();
        tx.send(Command::Fire).unwrap();
        tx.send(Command::Restart).unwrap();

        assert_eq!(drain_input(&rx), Some(FrameInput { fire: true, restart: true }));
        assert_eq!(drain_input(&rx), Some(FrameInput::idle()));

        tx.send(Command::Quit).unwrap();
        assert_eq!(drain_input(&rx), None);

        drop(tx);
        assert_eq!(drain_input(&rx), None);
    }
}
