use super::graph::WorkflowGraph;

/// Linear undo/redo stack of full graph snapshots.
///
/// Grows by truncate-then-append: recording after an undo discards the
/// redo tail. The snapshot at the current index mirrors live store state
/// right after every recorded mutation, and callers apply returned
/// snapshots back into the store before mutating further. A session
/// starts with no entries at all; the seeded root graph is live state
/// but is not itself a snapshot, so the first recorded entry is the
/// undo floor.
#[derive(Clone, Debug, Default)]
pub struct History {
	entries: Vec<WorkflowGraph>,
	index: Option<usize>,
}

impl History {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Index of the snapshot mirroring live state, `None` before the
	/// first recorded mutation.
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	/// Snapshot at the current index.
	pub fn current(&self) -> Option<&WorkflowGraph> {
		self.index.and_then(|i| self.entries.get(i))
	}

	pub fn can_undo(&self) -> bool {
		self.index.is_some_and(|i| i > 0)
	}

	pub fn can_redo(&self) -> bool {
		self.index.is_some_and(|i| i + 1 < self.entries.len())
	}

	/// Appends the snapshot taken right after an accepted mutation,
	/// discarding any entries beyond the current index.
	pub fn record(&mut self, snapshot: WorkflowGraph) {
		let keep = self.index.map_or(0, |i| i + 1);
		self.entries.truncate(keep);
		self.entries.push(snapshot);
		self.index = Some(self.entries.len() - 1);
	}

	/// Steps back one snapshot and returns it for the caller to apply.
	/// No-op at the first entry or on an empty history.
	pub fn undo(&mut self) -> Option<WorkflowGraph> {
		let i = self.index?;
		if i == 0 {
			return None;
		}
		self.index = Some(i - 1);
		self.entries.get(i - 1).cloned()
	}

	/// Steps forward one snapshot and returns it for the caller to
	/// apply. No-op at the newest entry.
	pub fn redo(&mut self) -> Option<WorkflowGraph> {
		let next = self.index? + 1;
		if next >= self.entries.len() {
			return None;
		}
		self.index = Some(next);
		self.entries.get(next).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::super::catalog::{provider, spawn_position};
	use super::*;

	fn snap(ids: &[&str]) -> WorkflowGraph {
		let mut graph = WorkflowGraph::seeded();
		for (seq, id) in ids.iter().enumerate() {
			graph.add_node(provider(id).unwrap().to_node(spawn_position(seq)));
		}
		graph
	}

	#[test]
	fn starts_empty_with_no_index() {
		let history = History::new();
		assert_eq!(history.len(), 0);
		assert_eq!(history.index(), None);
		assert!(history.current().is_none());
		assert!(!history.can_undo());
		assert!(!history.can_redo());
	}

	#[test]
	fn undo_and_redo_on_empty_history_are_no_ops() {
		let mut history = History::new();
		assert!(history.undo().is_none());
		assert!(history.redo().is_none());
		assert_eq!(history.index(), None);
	}

	#[test]
	fn record_advances_index_to_the_tail() {
		let mut history = History::new();
		history.record(snap(&["1"]));
		assert_eq!((history.len(), history.index()), (1, Some(0)));
		history.record(snap(&["1", "2"]));
		assert_eq!((history.len(), history.index()), (2, Some(1)));
		assert_eq!(history.current(), Some(&snap(&["1", "2"])));
	}

	#[test]
	fn undo_at_first_entry_is_a_no_op() {
		let mut history = History::new();
		history.record(snap(&["1"]));
		assert!(history.undo().is_none());
		assert_eq!(history.index(), Some(0));
	}

	#[test]
	fn undo_then_redo_restores_the_pre_undo_snapshot() {
		let mut history = History::new();
		history.record(snap(&["1"]));
		history.record(snap(&["1", "2"]));
		history.record(snap(&["1", "2", "3"]));

		let undone = history.undo().unwrap();
		assert_eq!(undone, snap(&["1", "2"]));
		assert_eq!(history.index(), Some(1));

		let redone = history.redo().unwrap();
		assert_eq!(redone, snap(&["1", "2", "3"]));
		assert_eq!(history.index(), Some(2));
	}

	#[test]
	fn redo_at_the_tail_is_a_no_op() {
		let mut history = History::new();
		history.record(snap(&["1"]));
		history.record(snap(&["1", "2"]));
		assert!(history.redo().is_none());
		assert_eq!(history.index(), Some(1));
	}

	#[test]
	fn recording_after_undo_discards_the_redo_tail() {
		let mut history = History::new();
		history.record(snap(&["1"]));
		history.record(snap(&["1", "2"]));
		history.record(snap(&["1", "2", "3"]));
		history.undo();
		history.undo();
		assert_eq!(history.index(), Some(0));

		history.record(snap(&["1", "4"]));
		assert_eq!((history.len(), history.index()), (2, Some(1)));
		assert!(!history.can_redo());
		assert_eq!(history.current(), Some(&snap(&["1", "4"])));
	}

	#[test]
	fn current_tracks_every_step() {
		let mut history = History::new();
		let first = snap(&["1"]);
		let second = snap(&["1", "2"]);
		history.record(first.clone());
		history.record(second.clone());
		assert_eq!(history.current(), Some(&second));
		history.undo();
		assert_eq!(history.current(), Some(&first));
		history.redo();
		assert_eq!(history.current(), Some(&second));
	}
}
