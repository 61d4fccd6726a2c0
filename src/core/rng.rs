//! Random number sources for shot resolution and game setup.
//!
//! ## Key Features
//!
//! - **Injectable**: Rules draw through the `RandomSource` trait, never a
//!   concrete generator
//! - **Deterministic**: `GameRng` with the same seed produces the same duel
//! - **Scriptable**: `ScriptedRng` replays fixed rolls so tests can force a
//!   hit or a click
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use face_death::core::{GameRng, RandomSource, ScriptedRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_inclusive(1, 5);
//! assert!((1..=5).contains(&roll));
//!
//! // Force a roll of 3, then 5
//! let mut scripted = ScriptedRng::new([3, 5]);
//! assert_eq!(scripted.gen_inclusive(1, 5), 3);
//! assert_eq!(scripted.gen_inclusive(1, 5), 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer source used by the rules.
///
/// Implementations must return a value in `[low, high]` inclusive.
pub trait RandomSource {
    /// Draw a uniform integer in `[low, high]`.
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Fair coin flip, drawn as a roll in `[1, 2]`.
    fn coin_flip(&mut self) -> bool {
        self.gen_inclusive(1, 2) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).gen_inclusive(low, high)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high, "empty range [{low}, {high}]");
        self.inner.gen_range(low..=high)
    }

    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the RNG was created with
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// Each value is clamped into the requested range so a script written for
/// one drum size never yields an out-of-range roll.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source from a sequence of rolls.
    ///
    /// An empty script always yields the low end of the requested range.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of rolls drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = if self.rolls.is_empty() {
            low
        } else {
            self.rolls[self.cursor % self.rolls.len()]
        };
        self.cursor += 1;
        value.clamp(low, high)
    }
}
