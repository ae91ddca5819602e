//! Keystroke journal.
//!
//! The tape records every event the session applies, with the phase on
//! either side and the display text that resulted. It is an append-only
//! value: `record` returns a new tape rather than mutating, so a snapshot
//! taken before an event is never invalidated by it.

use super::input::Input;
use crate::core::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single applied keypad event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The event that was applied
    pub input: Input,
    /// The phase before the event
    pub from: Phase,
    /// The phase after the event
    pub to: Phase,
    /// The display text after the event
    pub display: String,
    /// When the event was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of applied events.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use reckon::core::Phase;
/// use reckon::session::{Input, Tape, TapeEntry};
///
/// let tape = Tape::new();
/// let tape = tape.record(TapeEntry {
///     input: Input::Digit(5),
///     from: Phase::Empty,
///     to: Phase::Empty,
///     display: "5".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Create a new empty tape.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new tape.
    ///
    /// The existing tape is left unchanged.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.last()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the tape has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The phases traversed: the first entry's origin, then each
    /// destination in order.
    pub fn phases(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(first.from);
        }
        path.extend(self.entries.iter().map(|entry| entry.to));
        path
    }
}
