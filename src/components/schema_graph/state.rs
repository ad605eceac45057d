use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};

use super::options::GraphOptions;
use super::transform::DisplayGraph;

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;

/// Per-node draw data resolved at build time: display id, label and the
/// category fill color from the options palette.
#[derive(Clone, Debug, Default)]
pub struct NodeVisual {
	pub id: String,
	pub label: String,
	pub color: &'static str,
}

/// Per-edge draw data carried through the simulation as edge user data.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeVisual {
	pub color: &'static str,
	pub dashes: bool,
	pub arrow_to: bool,
	pub label: Option<&'static str>,
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
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Owns the force simulation built from one display graph, plus the view
/// transform and interaction bookkeeping. Rebuilt wholesale whenever the
/// display graph changes.
pub struct CanvasState {
	pub graph: ForceGraph<NodeVisual, EdgeVisual>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl CanvasState {
	pub fn new(display: &DisplayGraph, options: &GraphOptions, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(options.simulation_parameters());
		let mut id_to_idx = HashMap::new();

		for (i, node) in display.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / display.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeVisual {
					id: node.id.clone(),
					label: node.label.clone(),
					color: options.groups.color(node.group),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for edge in &display.edges {
			// Edges naming unknown ids are a caller problem; skip them.
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.from), id_to_idx.get(&edge.to)) {
				graph.add_edge(
					src,
					tgt,
					EdgeData {
						user_data: EdgeVisual {
							color: edge.color,
							dashes: edge.dashes,
							arrow_to: edge.arrow_to,
							label: edge.label,
						},
						..Default::default()
					},
				);
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x(), node.y()));
			}
		});
		found
	}

	/// Reposition a node and anchor it there so the simulation stops
	/// moving it.
	pub fn move_node(&mut self, idx: DefaultNodeIdx, x: f32, y: f32) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
			}
		});
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
