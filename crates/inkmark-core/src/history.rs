//! Linear undo/redo history over canvas snapshots.

use crate::canvas::Snapshot;

/// Maximum number of snapshots to keep.
pub const MAX_HISTORY: usize = 50;

/// Ordered snapshot sequence plus a cursor marking the visible state.
///
/// Committing while the cursor is not at the end discards every state after
/// it (linear undo, not a history tree). The cursor always satisfies
/// `cursor < depth`, and the oldest snapshot is dropped once the sequence
/// outgrows [`MAX_HISTORY`].
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding a single empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::new()],
            cursor: 0,
        }
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Append `snapshot` after the cursor, discarding any redo branch.
    /// Returns the new cursor.
    pub fn commit(&mut self, snapshot: Snapshot) -> usize {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
        log::debug!(
            "history commit: {} snapshots, cursor {}",
            self.snapshots.len(),
            self.cursor
        );
        self.cursor
    }

    /// Step the cursor back one state and return the now-current snapshot.
    /// At the oldest state this is a no-op.
    pub fn undo(&mut self) -> &Snapshot {
        if self.cursor > 0 {
            self.cursor -= 1;
            log::debug!("history undo: cursor {}", self.cursor);
        } else {
            log::trace!("history undo: already at oldest state");
        }
        self.current()
    }

    /// Step the cursor forward one state and return the now-current
    /// snapshot. At the newest state this is a no-op.
    pub fn redo(&mut self) -> &Snapshot {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            log::debug!("history redo: cursor {}", self.cursor);
        } else {
            log::trace!("history redo: already at newest state");
        }
        self.current()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Cursor position (index of the visible snapshot).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
