use std::cell::RefCell;
use std::collections::HashMap;

use super::error::WorkflowError;
use super::graph::WorkflowGraph;

/// Key the editor saves and loads its graph under.
pub const STORAGE_KEY: &str = "workflow";

/// A named string store the editor persists through. Browser
/// localStorage in the app, [`MemoryStore`] in tests.
pub trait StoragePort {
	fn read(&self, key: &str) -> Option<String>;
	fn write(&self, key: &str, value: &str);
}

/// Serializes a graph to its wire JSON.
pub fn to_json(graph: &WorkflowGraph) -> Result<String, WorkflowError> {
	Ok(serde_json::to_string(graph)?)
}

/// Parses wire JSON back into a graph. A document without an `edges`
/// key gets an empty edge list; unknown keys are ignored.
pub fn from_json(json: &str) -> Result<WorkflowGraph, WorkflowError> {
	Ok(serde_json::from_str(json)?)
}

pub fn save_workflow(store: &impl StoragePort, graph: &WorkflowGraph) -> Result<(), WorkflowError> {
	let json = to_json(graph)?;
	store.write(STORAGE_KEY, &json);
	Ok(())
}

pub fn load_workflow(store: &impl StoragePort) -> Result<WorkflowGraph, WorkflowError> {
	let json = store.read(STORAGE_KEY).ok_or(WorkflowError::EmptyPersistedData)?;
	from_json(&json)
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl StoragePort for MemoryStore {
	fn read(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}

	fn write(&self, key: &str, value: &str) {
		self.entries.borrow_mut().insert(key.to_string(), value.to_string());
	}
}
