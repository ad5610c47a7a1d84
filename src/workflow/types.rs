use serde::{Deserialize, Serialize};

/// Id of the fixed "Payment Initialize" node; every edge must touch it.
pub const ROOT_ID: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Whether a provider is currently usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
	Active,
	Inactive,
}

impl NodeStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Inactive => "inactive",
		}
	}
}

/// Rendering selector carried in the wire format's `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
	#[serde(rename = "customNode")]
	Card,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
	pub label: String,
	#[serde(rename = "paymentAmount")]
	pub payment_amount: u32,
	#[serde(rename = "providerType")]
	pub provider_type: String,
	pub status: NodeStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
	pub id: String,
	pub data: NodeData,
	pub position: Position,
	#[serde(rename = "type")]
	pub kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEdge {
	pub id: String,
	pub source: String,
	pub target: String,
}

impl WorkflowEdge {
	/// Edge between two nodes, its id derived from the endpoints.
	pub fn between(source: &str, target: &str) -> Self {
		Self {
			id: format!("e{source}-{target}"),
			source: source.to_owned(),
			target: target.to_owned(),
		}
	}
}
