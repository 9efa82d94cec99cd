//! Linear state history with undo/redo navigation.
//!
//! The history is a single timeline of visited states plus a cursor. Undo
//! and redo move the cursor without discarding anything. Recording a new
//! state while the cursor sits behind the newest entry (after an undo)
//! truncates the old future and starts a fresh branch at the cursor.

use super::id::Id;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

/// A state entered at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry<S: Id> {
    /// The state that was entered
    pub state: S,
    /// When the state was first entered along this timeline
    pub entered_at: DateTime<Utc>,
}

impl<S: Id> HistoryEntry<S> {
    fn now(state: S) -> Self {
        Self {
            state,
            entered_at: Utc::now(),
        }
    }
}

/// Ordered timeline of visited states with a navigation cursor.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new("A".to_string());
/// history.record("B".to_string());
/// history.record("C".to_string());
///
/// assert_eq!(history.undo(), Some(&"B".to_string()));
/// assert!(history.is_divergent());
///
/// // Recording while behind the newest entry discards "C"
/// history.record("D".to_string());
/// assert_eq!(history.path(), vec!["A", "B", "D"]);
/// assert_eq!(history.redo(), None);
/// ```
#[derive(Clone, Debug)]
pub struct History<S: Id> {
    entries: Vec<HistoryEntry<S>>,
    cursor: usize,
    divergent: bool,
}

impl<S: Id> History<S> {
    /// Create a history containing only the initial state.
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial)],
            cursor: 0,
            divergent: false,
        }
    }

    /// Record a newly entered state.
    ///
    /// The cursor advances first. If the last navigation was an undo, the
    /// entries from the new cursor position onwards are dropped before the
    /// state is appended. If the cursor no longer points at the appended
    /// entry (the history was cleared underneath it), it is snapped back to
    /// the newest entry.
    pub fn record(&mut self, state: S) {
        self.cursor += 1;

        if self.divergent {
            self.entries.truncate(self.cursor);
            self.divergent = false;
        }

        self.entries.push(HistoryEntry::now(state));

        let newest = self.entries.len() - 1;
        if self.cursor != newest {
            debug!(
                cursor = self.cursor,
                newest, "re-linearizing history cursor"
            );
            self.cursor = newest;
        }
    }

    /// Step the cursor back one entry.
    ///
    /// Returns the state now under the cursor, or `None` when there is
    /// nothing to undo. The entries ahead of the cursor stay available for
    /// [`History::redo`].
    pub fn undo(&mut self) -> Option<&S> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.divergent = true;
        self.entries.get(self.cursor).map(|e| &e.state)
    }

    /// Step the cursor forward one entry.
    ///
    /// Returns the state now under the cursor, or `None` when already at the
    /// newest entry. Does not clear the divergent flag.
    pub fn redo(&mut self) -> Option<&S> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(|e| &e.state)
    }

    /// Check if [`History::undo`] would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1 && self.cursor > 0 && self.cursor < self.entries.len()
    }

    /// Check if [`History::redo`] would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.entries.len() > 1 && self.cursor + 1 < self.entries.len()
    }

    /// Drop every entry. The cursor and divergent flag are left as they are.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// State under the cursor, if the cursor is in bounds.
    pub fn current(&self) -> Option<&S> {
        self.entries.get(self.cursor).map(|e| &e.state)
    }

    /// Cursor position within the timeline.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True after an undo until the next recorded state.
    pub fn is_divergent(&self) -> bool {
        self.divergent
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry<S>] {
        &self.entries
    }

    /// The visited states, oldest first.
    pub fn path(&self) -> Vec<&S> {
        self.entries.iter().map(|e| &e.state).collect()
    }

    /// Time between the oldest and newest entries.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.entered_at.signed_duration_since(first.entered_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
