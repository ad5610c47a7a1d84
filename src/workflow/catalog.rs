use super::types::{NodeData, NodeKind, NodeStatus, Position, ROOT_ID, WorkflowNode};

/// One selectable entry in the provider picker.
#[derive(Clone, Copy, Debug)]
pub struct ProviderEntry {
	pub id: &'static str,
	pub label: &'static str,
	pub amount: u32,
	pub provider_type: &'static str,
	pub status: NodeStatus,
}

/// Fixed picker catalog. Selecting an id already on the canvas is a
/// no-op.
pub const PROVIDERS: [ProviderEntry; 6] = [
	ProviderEntry {
		id: "1",
		label: "Google Pay",
		amount: 300,
		provider_type: "Digital Wallet",
		status: NodeStatus::Active,
	},
	ProviderEntry {
		id: "2",
		label: "Stripe",
		amount: 450,
		provider_type: "Payment Gateway",
		status: NodeStatus::Inactive,
	},
	ProviderEntry {
		id: "3",
		label: "Apple Pay",
		amount: 600,
		provider_type: "Digital Wallet",
		status: NodeStatus::Active,
	},
	ProviderEntry {
		id: "4",
		label: "PayPal",
		amount: 125000,
		provider_type: "Digital Wallet",
		status: NodeStatus::Active,
	},
	ProviderEntry {
		id: "5",
		label: "Amazon Pay",
		amount: 850,
		provider_type: "Digital Wallet",
		status: NodeStatus::Inactive,
	},
	ProviderEntry {
		id: "6",
		label: "Square",
		amount: 350,
		provider_type: "Payment Gateway",
		status: NodeStatus::Active,
	},
];

/// Looks up a picker entry by id.
pub fn provider(id: &str) -> Option<&'static ProviderEntry> {
	PROVIDERS.iter().find(|p| p.id == id)
}

impl ProviderEntry {
	/// Materializes the catalog entry as a card node at `position`.
	pub fn to_node(&self, position: Position) -> WorkflowNode {
		WorkflowNode {
			id: self.id.to_owned(),
			data: NodeData {
				label: self.label.to_owned(),
				payment_amount: self.amount,
				provider_type: self.provider_type.to_owned(),
				status: self.status,
			},
			position,
			kind: NodeKind::Card,
		}
	}
}

/// The fixed Payment Initialize node seeding every editing session.
pub fn root_node() -> WorkflowNode {
	WorkflowNode {
		id: ROOT_ID.to_owned(),
		data: NodeData {
			label: "Payment Initialize".to_owned(),
			payment_amount: 300,
			provider_type: "Initialization".to_owned(),
			status: NodeStatus::Active,
		},
		position: Position::new(250.0, 50.0),
		kind: NodeKind::Card,
	}
}

/// Spawn position for the `seq`-th node dropped onto the canvas, spread
/// across a 0..500 square near the root.
pub fn spawn_position(seq: usize) -> Position {
	Position::new(scatter(seq * 2), scatter(seq * 2 + 1))
}

/// Simple pseudo-random scatter (deterministic for consistency).
fn scatter(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0 * 500.0
}
