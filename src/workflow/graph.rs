use serde::{Deserialize, Serialize};

use super::catalog;
use super::error::WorkflowError;
use super::types::{Position, ROOT_ID, WorkflowEdge, WorkflowNode};

/// Ordered node and edge sequences making up one workflow diagram.
///
/// Doubles as the snapshot unit recorded into
/// [`History`](super::history::History): a snapshot is a clone of the
/// whole graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
	pub nodes: Vec<WorkflowNode>,
	#[serde(default)]
	pub edges: Vec<WorkflowEdge>,
}

/// Star-topology admission test: an edge is allowed only if one endpoint
/// is the Payment Initialize node.
pub fn is_admissible(source: &str, target: &str) -> bool {
	source == ROOT_ID || target == ROOT_ID
}

impl WorkflowGraph {
	/// Empty graph, the deserialization target. Editing sessions start
	/// from [`WorkflowGraph::seeded`] instead.
	pub fn new() -> Self {
		Self::default()
	}

	/// Graph holding only the Payment Initialize root node.
	pub fn seeded() -> Self {
		Self {
			nodes: vec![catalog::root_node()],
			edges: Vec::new(),
		}
	}

	pub fn contains(&self, id: &str) -> bool {
		self.nodes.iter().any(|n| n.id == id)
	}

	pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Appends `node` unless its id is already present. Returns whether
	/// the graph changed; a duplicate id is a no-op, not an error.
	pub fn add_node(&mut self, node: WorkflowNode) -> bool {
		if self.contains(&node.id) {
			return false;
		}
		self.nodes.push(node);
		true
	}

	/// Removes the node with `id` and every edge touching it. Removing
	/// an absent id is a no-op.
	pub fn remove_node(&mut self, id: &str) -> bool {
		let before = self.nodes.len();
		self.nodes.retain(|n| n.id != id);
		if self.nodes.len() == before {
			return false;
		}
		self.edges.retain(|e| e.source != id && e.target != id);
		true
	}

	/// Gates a proposed edge through the connectivity rule, then appends
	/// it. `Ok(true)` means appended; `Ok(false)` means an edge with the
	/// same derived id already exists; a rejection mutates nothing.
	pub fn add_edge(&mut self, source: &str, target: &str) -> Result<bool, WorkflowError> {
		if !is_admissible(source, target) {
			return Err(WorkflowError::ConnectivityViolation);
		}
		let edge = WorkflowEdge::between(source, target);
		if self.edges.iter().any(|e| e.id == edge.id) {
			return Ok(false);
		}
		self.edges.push(edge);
		Ok(true)
	}

	/// Wholesale replacement used by load/import/undo/redo. The incoming
	/// snapshot is trusted; no validation is re-run.
	pub fn replace(&mut self, snapshot: WorkflowGraph) {
		*self = snapshot;
	}

	/// Repositions a node after a drag. Position changes are live state
	/// but are never recorded into history.
	pub fn move_node(&mut self, id: &str, x: f64, y: f64) -> bool {
		match self.nodes.iter_mut().find(|n| n.id == id) {
			Some(node) => {
				node.position = Position::new(x, y);
				true
			}
			None => false,
		}
	}
}
