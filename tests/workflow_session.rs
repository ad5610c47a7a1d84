use payment_flow_canvas::workflow::{
	History, MemoryStore, NoticeBoard, NoticeKind, WorkflowError, WorkflowGraph, catalog,
	from_json, graph_connections, load_workflow, save_workflow,
};

fn add_provider(graph: &mut WorkflowGraph, id: &str) {
	let entry = catalog::provider(id).unwrap();
	let seq = graph.nodes.len();
	assert!(graph.add_node(entry.to_node(catalog::spawn_position(seq))));
}

#[test]
fn adding_and_connecting_then_undoing_to_the_floor() {
	let mut graph = WorkflowGraph::seeded();
	let mut history = History::new();

	// pick Stripe from the catalog
	add_provider(&mut graph, "2");
	history.record(graph.clone());
	assert_eq!((history.len(), history.index()), (1, Some(0)));
	assert_eq!(history.current(), Some(&graph));

	// wire it to the root
	assert!(graph.add_edge("0", "2").unwrap());
	history.record(graph.clone());
	assert_eq!((history.len(), history.index()), (2, Some(1)));
	assert_eq!(history.current(), Some(&graph));

	// first undo drops the edge but keeps the node
	let snapshot = history.undo().unwrap();
	graph.replace(snapshot);
	assert!(graph.edges.is_empty());
	assert!(graph.contains("2"));
	assert_eq!(history.index(), Some(0));

	// the first recorded entry is the floor; undoing there changes nothing
	assert!(history.undo().is_none());
	assert_eq!((history.len(), history.index()), (2, Some(0)));
	assert!(graph.contains("2"));
}

#[test]
fn provider_to_provider_connection_is_rejected_and_unrecorded() {
	let mut graph = WorkflowGraph::seeded();
	let mut history = History::new();

	add_provider(&mut graph, "2");
	history.record(graph.clone());
	assert!(graph.add_edge("0", "2").unwrap());
	history.record(graph.clone());

	let result = graph.add_edge("2", "3");
	assert!(matches!(result, Err(WorkflowError::ConnectivityViolation)));
	assert_eq!(graph.edges.len(), 1);
	assert_eq!((history.len(), history.index()), (2, Some(1)));
	assert_eq!(history.current(), Some(&graph));
}

#[test]
fn snapshot_at_index_mirrors_live_state_after_every_mutation() {
	let mut graph = WorkflowGraph::seeded();
	let mut history = History::new();

	add_provider(&mut graph, "1");
	history.record(graph.clone());
	assert_eq!(history.current(), Some(&graph));

	add_provider(&mut graph, "3");
	history.record(graph.clone());
	assert_eq!(history.current(), Some(&graph));

	assert!(graph.add_edge("0", "1").unwrap());
	history.record(graph.clone());
	assert_eq!(history.current(), Some(&graph));

	assert!(graph.add_edge("3", "0").unwrap());
	history.record(graph.clone());
	assert_eq!(history.current(), Some(&graph));

	assert!(graph.remove_node("1"));
	history.record(graph.clone());
	assert_eq!(history.current(), Some(&graph));

	// removal cascaded: nothing references a node that is gone
	assert!(
		graph
			.edges
			.iter()
			.all(|edge| graph.contains(&edge.source) && graph.contains(&edge.target))
	);
	assert_eq!(graph.edges.len(), 1);
}

#[test]
fn undo_then_redo_restores_the_exact_pre_undo_workflow() {
	let mut graph = WorkflowGraph::seeded();
	let mut history = History::new();

	add_provider(&mut graph, "1");
	history.record(graph.clone());
	assert!(graph.add_edge("0", "1").unwrap());
	history.record(graph.clone());
	let before_undo = graph.clone();

	graph.replace(history.undo().unwrap());
	assert!(graph.edges.is_empty());

	graph.replace(history.redo().unwrap());
	assert_eq!(graph, before_undo);
}

#[test]
fn mutating_after_undo_discards_the_redo_branch() {
	let mut graph = WorkflowGraph::seeded();
	let mut history = History::new();

	add_provider(&mut graph, "1");
	history.record(graph.clone());
	add_provider(&mut graph, "2");
	history.record(graph.clone());

	graph.replace(history.undo().unwrap());
	assert!(!graph.contains("2"));

	add_provider(&mut graph, "5");
	history.record(graph.clone());
	assert!(!history.can_redo());
	assert_eq!((history.len(), history.index()), (2, Some(1)));
	assert!(graph.contains("5"));
	assert!(!graph.contains("2"));
}

#[test]
fn saved_workflow_survives_the_store_round_trip() {
	let mut graph = WorkflowGraph::seeded();
	add_provider(&mut graph, "1");
	assert!(graph.add_edge("0", "1").unwrap());

	let store = MemoryStore::new();
	save_workflow(&store, &graph).unwrap();
	let restored = load_workflow(&store).unwrap();
	assert_eq!(restored, graph);

	// highlight recomputation works off the restored edge list
	let highlights = graph_connections(&restored, "1");
	assert!(highlights.node_ids.contains("0"));
	assert!(highlights.edge_ids.contains("e0-1"));
}

#[test]
fn loading_before_any_save_reports_no_data() {
	let store = MemoryStore::new();
	let result = load_workflow(&store);
	assert!(matches!(result, Err(WorkflowError::EmptyPersistedData)));
}

#[test]
fn imported_json_is_trusted_beyond_wellformedness() {
	// an edge referencing an absent node and an unknown key both pass
	let json = r#"{
		"nodes": [
			{
				"id": "0",
				"data": {
					"label": "Payment Initialize",
					"paymentAmount": 300,
					"providerType": "Initialization",
					"status": "active"
				},
				"position": { "x": 250.0, "y": 50.0 },
				"type": "customNode"
			}
		],
		"edges": [{ "id": "e0-9", "source": "0", "target": "9" }],
		"viewport": { "zoom": 1.5 }
	}"#;
	let imported = from_json(json).unwrap();
	assert_eq!(imported.nodes.len(), 1);
	assert_eq!(imported.edges.len(), 1);
	assert_eq!(imported.edges[0].target, "9");
}

#[test]
fn rejected_connection_notice_expires_after_the_display_window() {
	let mut graph = WorkflowGraph::seeded();
	add_provider(&mut graph, "2");

	let err = graph.add_edge("2", "3").unwrap_err();
	let mut board = NoticeBoard::new();
	board.post(NoticeKind::Error, err.to_string(), 10_000.0);

	let notice = board.current().unwrap();
	assert_eq!(notice.kind, NoticeKind::Error);
	assert_eq!(
		notice.text,
		"Edges can only connect to the Payment Initialize node!"
	);

	assert!(!board.sweep(12_999.0));
	assert!(board.current().is_some());
	assert!(board.sweep(13_000.0));
	assert!(board.current().is_none());
}
