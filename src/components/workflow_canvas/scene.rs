use crate::workflow::{Highlights, NodeStatus, ROOT_ID, WorkflowGraph};

pub const ROOT_CARD_WIDTH: f64 = 200.0;
pub const ROOT_CARD_HEIGHT: f64 = 72.0;
pub const CARD_WIDTH: f64 = 170.0;
pub const CARD_HEIGHT: f64 = 86.0;
pub const CARD_RADIUS: f64 = 10.0;
pub const HANDLE_RADIUS: f64 = 5.0;
pub const HANDLE_HIT_RADIUS: f64 = 9.0;
pub const CLOSE_SIZE: f64 = 16.0;

#[derive(Clone, Debug)]
pub struct SceneNode {
	pub id: String,
	pub label: String,
	pub amount: u32,
	pub provider_type: String,
	pub status: NodeStatus,
	// top-left corner, graph-space
	pub x: f64,
	pub y: f64,
}

impl SceneNode {
	pub fn is_root(&self) -> bool {
		self.id == ROOT_ID
	}

	pub fn width(&self) -> f64 {
		if self.is_root() { ROOT_CARD_WIDTH } else { CARD_WIDTH }
	}

	pub fn height(&self) -> f64 {
		if self.is_root() { ROOT_CARD_HEIGHT } else { CARD_HEIGHT }
	}

	pub fn contains(&self, gx: f64, gy: f64) -> bool {
		gx >= self.x && gx <= self.x + self.width() && gy >= self.y && gy <= self.y + self.height()
	}

	// connections leave from the bottom edge and arrive at the top edge
	pub fn handle_out(&self) -> (f64, f64) {
		(self.x + self.width() / 2.0, self.y + self.height())
	}

	pub fn handle_in(&self) -> (f64, f64) {
		(self.x + self.width() / 2.0, self.y)
	}

	pub fn close_center(&self) -> (f64, f64) {
		(self.x + self.width() - CLOSE_SIZE * 0.75, self.y + CLOSE_SIZE * 0.75)
	}
}

#[derive(Clone, Debug)]
pub struct SceneEdge {
	pub id: String,
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LinkState {
	pub active: bool,
	pub source_idx: Option<usize>,
	pub to_x: f64,
	pub to_y: f64,
}

pub enum Hit {
	Close(usize),
	Handle(usize),
	Body(usize),
}

pub struct SceneState {
	pub nodes: Vec<SceneNode>,
	pub edges: Vec<SceneEdge>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub link: LinkState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	pub highlight_t: f64,
	pub selected: String,
	highlights: Highlights,
	prev_highlights: Highlights,
}

impl SceneState {
	pub fn new(graph: &WorkflowGraph, width: f64, height: f64) -> Self {
		let mut scene = Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			transform: ViewTransform { x: 0.0, y: 0.0, k: 1.0 },
			drag: DragState::default(),
			pan: PanState::default(),
			link: LinkState::default(),
			width,
			height,
			flow_time: 0.0,
			highlight_t: 0.0,
			selected: String::new(),
			highlights: Highlights::default(),
			prev_highlights: Highlights::default(),
		};
		scene.rebuild(graph);
		scene
	}

	/// Mirrors the graph into scene nodes/edges and applies the current
	/// highlight sets. A node being dragged keeps its in-flight position
	/// so a mid-drag rebuild does not snap it back.
	pub fn sync(&mut self, graph: &WorkflowGraph, highlights: &Highlights, selected: &str) {
		let dragged = self
			.drag
			.node_idx
			.and_then(|idx| self.nodes.get(idx))
			.map(|node| (node.id.clone(), node.x, node.y));

		self.rebuild(graph);

		if let Some((id, x, y)) = dragged {
			let idx = self.nodes.iter().position(|node| node.id == id);
			if let Some(idx) = idx {
				self.nodes[idx].x = x;
				self.nodes[idx].y = y;
			}
			self.drag.node_idx = idx;
			if idx.is_none() {
				self.drag.active = false;
			}
		}
		if let Some(idx) = self.link.source_idx {
			if idx >= self.nodes.len() {
				self.link = LinkState::default();
			}
		}

		self.selected = selected.to_string();
		self.set_highlights(highlights);
	}

	fn rebuild(&mut self, graph: &WorkflowGraph) {
		let nodes: Vec<SceneNode> = graph
			.nodes
			.iter()
			.map(|node| SceneNode {
				id: node.id.clone(),
				label: node.data.label.clone(),
				amount: node.data.payment_amount,
				provider_type: node.data.provider_type.clone(),
				status: node.data.status,
				x: node.position.x,
				y: node.position.y,
			})
			.collect();

		let index_of = |id: &str| nodes.iter().position(|node| node.id == id);
		// edges pointing at absent nodes stay in the store but cannot be drawn
		self.edges = graph
			.edges
			.iter()
			.filter_map(|edge| {
				Some(SceneEdge {
					id: edge.id.clone(),
					source: index_of(&edge.source)?,
					target: index_of(&edge.target)?,
				})
			})
			.collect();
		self.nodes = nodes;
	}

	fn set_highlights(&mut self, next: &Highlights) {
		if self.highlights == *next {
			return;
		}
		if !self.highlights.is_empty() && next.is_empty() {
			// keep the old sets around so the glow can fade out
			self.prev_highlights = std::mem::take(&mut self.highlights);
		} else {
			self.prev_highlights = Highlights::default();
		}
		self.highlights = next.clone();
	}

	pub fn is_node_highlighted(&self, id: &str) -> bool {
		self.highlights.node_ids.contains(id) || self.prev_highlights.node_ids.contains(id)
	}

	pub fn is_edge_highlighted(&self, id: &str) -> bool {
		self.highlights.edge_ids.contains(id) || self.prev_highlights.edge_ids.contains(id)
	}

	pub fn has_active_highlight(&self) -> bool {
		!self.highlights.is_empty() || !self.prev_highlights.is_empty()
	}

	pub fn is_selected(&self, id: &str) -> bool {
		!self.selected.is_empty() && self.selected == id
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost interactive region under a screen point. Later nodes draw
	/// on top, so they are tested first.
	pub fn hit(&self, sx: f64, sy: f64) -> Option<Hit> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		for (idx, node) in self.nodes.iter().enumerate().rev() {
			if !node.is_root() {
				let (cx, cy) = node.close_center();
				if (gx - cx).abs() <= CLOSE_SIZE / 2.0 && (gy - cy).abs() <= CLOSE_SIZE / 2.0 {
					return Some(Hit::Close(idx));
				}
			}
			let (hx, hy) = node.handle_out();
			if dist(gx, gy, hx, hy) <= HANDLE_HIT_RADIUS {
				return Some(Hit::Handle(idx));
			}
			if node.contains(gx, gy) {
				return Some(Hit::Body(idx));
			}
		}
		None
	}

	/// Topmost node whose card or inbound handle is under a screen
	/// point, for resolving where a pending connection was dropped.
	pub fn node_at(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes.iter().enumerate().rev().find_map(|(idx, node)| {
			let (hx, hy) = node.handle_in();
			let over = node.contains(gx, gy) || dist(gx, gy, hx, hy) <= HANDLE_HIT_RADIUS;
			over.then_some(idx)
		})
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (target, speed) = if self.highlights.is_empty() {
			(0.0, 1.26)
		} else {
			(1.0, 1.8)
		};
		self.highlight_t += (target - self.highlight_t) * speed * dt;
		if target == 0.0 && self.highlight_t < 0.01 {
			self.highlight_t = 0.0;
			self.prev_highlights = Highlights::default();
		}
	}
}

fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	(dx * dx + dy * dy).sqrt()
}
