use std::collections::HashSet;

use super::graph::WorkflowGraph;
use super::types::WorkflowEdge;

/// Ids to render highlighted for the current selection: the edges
/// touching the selected node and the nodes at their endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
	pub node_ids: HashSet<String>,
	pub edge_ids: HashSet<String>,
}

impl Highlights {
	pub fn is_empty(&self) -> bool {
		self.node_ids.is_empty() && self.edge_ids.is_empty()
	}
}

/// Derives the highlight sets for `selected_id` from the edge list.
/// Node ids come only from the endpoints of matched edges, so an empty
/// selection or one with no touching edges highlights nothing.
pub fn connections(edges: &[WorkflowEdge], selected_id: &str) -> Highlights {
	let mut highlights = Highlights::default();
	if selected_id.is_empty() {
		return highlights;
	}
	for edge in edges {
		if edge.source == selected_id || edge.target == selected_id {
			highlights.node_ids.insert(edge.source.clone());
			highlights.node_ids.insert(edge.target.clone());
			highlights.edge_ids.insert(edge.id.clone());
		}
	}
	highlights
}

/// [`connections`] over a graph's edge list.
pub fn graph_connections(graph: &WorkflowGraph, selected_id: &str) -> Highlights {
	connections(&graph.edges, selected_id)
}

#[cfg(test)]
mod tests {
	use super::super::types::WorkflowEdge;
	use super::*;

	fn edges() -> Vec<WorkflowEdge> {
		vec![
			WorkflowEdge::between("0", "1"),
			WorkflowEdge::between("0", "2"),
			WorkflowEdge::between("3", "0"),
		]
	}

	#[test]
	fn empty_selection_highlights_nothing() {
		let highlights = connections(&edges(), "");
		assert!(highlights.is_empty());
	}

	#[test]
	fn selection_without_touching_edges_highlights_nothing() {
		assert!(connections(&[], "5").is_empty());
		// "5" appears in no edge of the fixture either
		let highlights = connections(&edges(), "5");
		assert!(highlights.node_ids.is_empty());
		assert!(highlights.edge_ids.is_empty());
	}

	#[test]
	fn selecting_a_hub_gathers_every_neighbor() {
		let highlights = connections(&edges(), "0");
		let expect: HashSet<String> =
			["0", "1", "2", "3"].iter().map(|s| s.to_string()).collect();
		assert_eq!(highlights.node_ids, expect);
		let expect_edges: HashSet<String> =
			["e0-1", "e0-2", "e3-0"].iter().map(|s| s.to_string()).collect();
		assert_eq!(highlights.edge_ids, expect_edges);
	}

	#[test]
	fn selecting_a_leaf_gathers_only_its_edge() {
		let highlights = connections(&edges(), "2");
		let expect: HashSet<String> = ["2", "0"].iter().map(|s| s.to_string()).collect();
		assert_eq!(highlights.node_ids, expect);
		assert_eq!(highlights.edge_ids, HashSet::from(["e0-2".to_string()]));
	}

	#[test]
	fn leaf_selection_matches_edges_in_both_directions() {
		let highlights = connections(&edges(), "3");
		assert!(highlights.node_ids.contains("0"));
		assert_eq!(highlights.edge_ids, HashSet::from(["e3-0".to_string()]));
	}
}
