//! Linear undo/redo history of element-list snapshots.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Ordered snapshots of the full element list plus a cursor.
///
/// The cursor always points at the snapshot matching the current list.
/// Recording after an undo drops every snapshot past the cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    index: usize,
    capacity: usize,
}

impl History {
    /// Start a history whose first snapshot is `initial`.
    ///
    /// `capacity` is clamped to at least one snapshot.
    #[must_use]
    pub fn new(initial: Vec<Element>, capacity: usize) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a snapshot after the cursor, truncating any redo tail.
    pub fn record(&mut self, snapshot: Vec<Element>) {
        let discarded = self.snapshots.len() - (self.index + 1);
        if discarded > 0 {
            tracing::debug!("Discarding {discarded} redo snapshots");
            self.snapshots.truncate(self.index + 1);
        }
        self.snapshots.push(snapshot);

        if self.snapshots.len() > self.capacity {
            let overflow = self.snapshots.len() - self.capacity;
            self.snapshots.drain(..overflow);
            tracing::debug!("History full, dropped {overflow} oldest snapshots");
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. Returns `None` at the first snapshot.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index).map(Vec::as_slice)
    }

    /// Step forward one snapshot. Returns `None` at the last snapshot.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index).map(Vec::as_slice)
    }

    /// Whether [`History::undo`] would move.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether [`History::redo`] would move.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Position of the cursor.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least its initial snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &[Element] {
        self.snapshots
            .get(self.index)
            .map_or(&[], Vec::as_slice)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new(), crate::config::DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    fn snapshot(n: usize) -> Vec<Element> {
        (0..n).map(|_| Element::new(ElementKind::Div, 0)).collect()
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::default();
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn test_undo_redo_walks_snapshots() {
        let mut history = History::default();
        let one = snapshot(1);
        let two = snapshot(2);
        history.record(one.clone());
        history.record(two.clone());

        assert_eq!(history.undo(), Some(one.as_slice()));
        assert_eq!(history.undo(), Some(&[][..]));
        assert!(history.undo().is_none());
        assert_eq!(history.redo(), Some(one.as_slice()));
        assert_eq!(history.redo(), Some(two.as_slice()));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_after_undo_truncates_redo() {
        let mut history = History::default();
        history.record(snapshot(1));
        history.record(snapshot(2));
        history.undo();
        history.undo();
        let fresh = snapshot(3);
        history.record(fresh.clone());

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.current(), fresh.as_slice());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new(Vec::new(), 3);
        for n in 1..=5 {
            history.record(snapshot(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().len(), 5);
        history.undo();
        history.undo();
        assert_eq!(history.current().len(), 3);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_capacity_keeps_one_snapshot() {
        let mut history = History::new(Vec::new(), 0);
        history.record(snapshot(1));
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
    }
}
