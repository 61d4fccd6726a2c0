//! Revolver duel: the player and an NPC share one cylinder.
//!
//! - The cylinder holds 1 to 5 live rounds out of 5 chambers
//! - Each side starts with 2 life points
//! - On your turn you pull the trigger on yourself; a live round costs a
//!   life point and leaves the cylinder
//! - The NPC "thinks" for 3 seconds before each of its shots
//! - The duel ends when a side is out of life or the cylinder is empty;
//!   more life left wins, equal life is a draw

mod game;
mod surface;

pub use game::{FrameInput, Roulette, MSG_NPC_THINKING, MSG_PLAYER_PROMPT, MSG_RESTART_PROMPT};
pub use surface::{DrawCall, TextBuffer, TextSurface, SCREEN_HEIGHT, SCREEN_WIDTH};
