//! Clocks for the NPC thinking delay.
//!
//! The driver reads the clock once per update and compares elapsed time
//! against the configured delay; nothing ever sleeps.
//! - `SystemClock`: backed by `std::time::Instant`
//! - `ManualClock`: advanced by hand, for tests and replays

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait GameClock {
    /// Time elapsed since the clock's epoch.
    fn now(&self) -> Duration;
}

impl<C: GameClock + ?Sized> GameClock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock time since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    startup: Instant,
}

impl SystemClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            startup: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock for SystemClock {
    fn now(&self) -> Duration {
        self.startup.elapsed()
    }
}

/// Hand-driven clock.
///
/// Interior mutability lets a test keep a shared reference inside the
/// driver and still move time forward between updates.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    elapsed: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Set the clock to an absolute reading.
    pub fn set(&self, at: Duration) {
        self.elapsed.set(at);
    }
}

impl GameClock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }
}
