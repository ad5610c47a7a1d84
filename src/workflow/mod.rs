//! Payment workflow state: the node/edge store, its star connectivity
//! rule, snapshot undo/redo, selection highlighting, transient notices,
//! and JSON persistence. Everything here is plain host-testable Rust;
//! browser concerns stay in the rendering layer.

pub mod catalog;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod history;
pub mod notice;
pub mod persist;
pub mod types;

pub use catalog::{PROVIDERS, ProviderEntry, provider, root_node, spawn_position};
pub use error::WorkflowError;
pub use graph::WorkflowGraph;
pub use highlight::{Highlights, connections, graph_connections};
pub use history::History;
pub use notice::{NOTICE_TTL_MS, Notice, NoticeBoard, NoticeKind};
pub use persist::{
	MemoryStore, STORAGE_KEY, StoragePort, from_json, load_workflow, save_workflow, to_json,
};
pub use types::{NodeData, NodeKind, NodeStatus, Position, ROOT_ID, WorkflowEdge, WorkflowNode};
