//! # Undo/Redo History
//!
//! A linear log of boundary snapshots.
//!
//! ## Design
//!
//! - The prior boundary list is recorded before every applied edit
//! - Undo swaps the current list for the most recent snapshot and keeps the
//!   current one for redo
//! - Redo swaps it back
//! - Recording a new edit discards the redo future
//! - A batch records only the snapshot taken before its first edit, so the
//!   whole batch undoes as one step
//! - Undo or redo inside a batch closes the current group; the next edit in
//!   the batch starts a new one
//!
//! ## Example
//!
//! ```rust
//! use codex_segmenter::{Boundaries, History};
//!
//! let mut history = History::new();
//! let before = Boundaries::whole(10);
//! let after = Boundaries::from_points(10, vec![5]);
//!
//! history.record(before.clone(), "Split");
//! assert_eq!(history.undo(&after), Some(before.clone()));
//! assert_eq!(history.redo(&before), Some(after));
//! ```

use crate::Boundaries;
use tracing::debug;

/// One recorded snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Boundary list before the labelled edit
    pub boundaries: Boundaries,

    /// Description of the edit that followed this snapshot
    pub label: String,
}

#[derive(Debug)]
struct Batch {
    label: String,
    recorded: bool,
}

/// Undo/redo log of boundary snapshots
#[derive(Debug)]
pub struct History {
    /// Snapshots before applied edits (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Snapshots after undone edits (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently grouping edits
    current_batch: Option<Batch>,
}

impl History {
    /// Create an unlimited history
    pub fn new() -> Self {
        Self::with_max_levels(0)
    }

    /// Create a history with a custom limit
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record the state before an edit
    pub fn record(&mut self, prior: Boundaries, label: impl Into<String>) {
        let label = label.into();

        if let Some(batch) = &mut self.current_batch {
            if batch.recorded {
                self.redo_stack.clear();
                return;
            }
            batch.recorded = true;
            let entry = HistoryEntry {
                boundaries: prior,
                label: batch.label.clone(),
            };
            self.push_entry(entry);
        } else {
            self.push_entry(HistoryEntry { boundaries: prior, label });
        }
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
            debug!(max_levels = self.max_levels, "Dropped oldest history entry");
        }

        self.redo_stack.clear();
    }

    /// Start grouping edits into one undo step
    pub fn begin_batch(&mut self, label: impl Into<String>) {
        self.current_batch = Some(Batch {
            label: label.into(),
            recorded: false,
        });
    }

    /// Stop grouping edits
    pub fn end_batch(&mut self) {
        self.current_batch = None;
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Step back. Returns the list to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &Boundaries) -> Option<Boundaries> {
        let entry = self.undo_stack.pop()?;
        self.reopen_batch();
        self.redo_stack.push(HistoryEntry {
            boundaries: current.clone(),
            label: entry.label.clone(),
        });
        Some(entry.boundaries)
    }

    /// Step forward. Returns the list to restore, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: &Boundaries) -> Option<Boundaries> {
        let entry = self.redo_stack.pop()?;
        self.reopen_batch();
        self.undo_stack.push(HistoryEntry {
            boundaries: current.clone(),
            label: entry.label.clone(),
        });
        Some(entry.boundaries)
    }

    fn reopen_batch(&mut self) {
        if let Some(batch) = &mut self.current_batch {
            batch.recorded = false;
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Index of the most recent recorded snapshot, `-1` when there is none
    pub fn cursor(&self) -> isize {
        self.undo_stack.len() as isize - 1
    }

    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|entry| entry.label.as_str())
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|entry| entry.label.as_str())
    }

    /// Snapshots available to undo, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.undo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(points: &[usize]) -> Boundaries {
        Boundaries::from_points(10, points.iter().copied())
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert_eq!(history.cursor(), -1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = History::new();
        assert_eq!(history.undo(&list(&[])), None);
        assert_eq!(history.redo(&list(&[])), None);
    }

    #[test]
    fn test_record_undo_redo() {
        let mut history = History::new();
        let before = list(&[3]);
        let after = list(&[3, 6]);

        history.record(before.clone(), "Split segment 2 at line 6");
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.undo_label(), Some("Split segment 2 at line 6"));

        assert_eq!(history.undo(&after), Some(before.clone()));
        assert_eq!(history.cursor(), -1);
        assert_eq!(history.redo_levels(), 1);
        assert_eq!(history.redo_label(), Some("Split segment 2 at line 6"));

        assert_eq!(history.redo(&before), Some(after));
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_new_record_clears_redo() {
        let mut history = History::new();
        history.record(list(&[]), "first");
        history.undo(&list(&[2]));
        assert!(history.can_redo());

        history.record(list(&[]), "second");
        assert!(!history.can_redo());
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(2);
        for i in 1..=3 {
            history.record(list(&[i]), format!("edit {}", i));
        }

        assert_eq!(history.undo_levels(), 2);
        assert_eq!(history.entries()[0].boundaries, list(&[2]));
    }

    #[test]
    fn test_zero_max_levels_is_unlimited() {
        let mut history = History::with_max_levels(0);
        for i in 1..=150 {
            history.record(list(&[i % 9 + 1]), "edit");
        }
        assert_eq!(history.undo_levels(), 150);
    }

    #[test]
    fn test_batch_records_first_snapshot_only() {
        let mut history = History::new();
        history.begin_batch("Drag boundary");
        history.record(list(&[3]), "toggle");
        history.record(list(&[4]), "toggle");
        history.record(list(&[5]), "toggle");
        history.end_batch();

        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.undo_label(), Some("Drag boundary"));
        assert_eq!(history.undo(&list(&[6])), Some(list(&[3])));
    }

    #[test]
    fn test_undo_inside_batch_starts_new_group() {
        let mut history = History::new();
        history.begin_batch("Drag boundary");
        history.record(list(&[]), "toggle");
        assert_eq!(history.undo(&list(&[2])), Some(list(&[])));
        assert!(history.can_redo());

        history.record(list(&[]), "toggle");
        history.record(list(&[5]), "toggle");
        history.end_batch();

        assert!(!history.can_redo());
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.undo(&list(&[5, 7])), Some(list(&[])));
    }

    #[test]
    fn test_redo_inside_batch_starts_new_group() {
        let mut history = History::new();
        history.begin_batch("group");
        history.record(list(&[]), "toggle");
        history.undo(&list(&[1]));
        history.redo(&list(&[]));
        assert_eq!(history.undo_levels(), 1);

        history.record(list(&[1]), "toggle");
        history.record(list(&[1, 2]), "toggle");
        history.end_batch();

        assert_eq!(history.undo_levels(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.undo(&list(&[1, 2, 3])), Some(list(&[1])));
        assert_eq!(history.undo(&list(&[1])), Some(list(&[])));
    }

    #[test]
    fn test_new_history_is_unlimited() {
        let mut history = History::new();
        for i in 1..=250 {
            history.record(list(&[i % 9 + 1]), "edit");
        }
        assert_eq!(history.undo_levels(), 250);
    }

    #[test]
    fn test_empty_batch_records_nothing() {
        let mut history = History::new();
        history.begin_batch("nothing");
        history.end_batch();
        assert!(!history.can_undo());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record(list(&[]), "a");
        history.undo(&list(&[1]));
        history.record(list(&[]), "b");
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
