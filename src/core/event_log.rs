//! Narrated event history.
//!
//! The log is append-only between resets and never holds two identical
//! adjacent entries: repeating the latest message is a no-op.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered history of distinct consecutive messages.
///
/// Backed by `im::Vector` so snapshots of the game state clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vector<String>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message unless it equals the latest entry.
    ///
    /// Returns true if the message was appended.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.entries.back() == Some(&message) {
            return false;
        }
        self.entries.push_back(message);
        true
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Iterate over entries in append order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Count entries equal to `message`.
    #[must_use]
    pub fn count(&self, message: &str) -> usize {
        self.iter().filter(|&e| e == message).count()
    }
}
