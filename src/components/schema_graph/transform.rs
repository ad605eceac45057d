//! Pure mapping from the abstract schema graph to the display graph the
//! canvas widget consumes: label rewriting for operation nodes and the
//! per-category edge palette. No validation happens here; unknown ids
//! referenced by edges are the caller's problem.

use super::types::{NodeKind, OPERATION_UNION, SchemaEdge, SchemaGraph, SchemaNode};

const ENTITY_EDGE_COLOR: &str = "rgba(99,24,255,0.4)";
const RELATION_EDGE_COLOR: &str = "rgba(147,241,238,0.4)";
const PERMISSION_EDGE_COLOR: &str = "rgba(91,204,99,0.4)";
const OPERATION_EDGE_COLOR: &str = "rgba(229,52,114,0.4)";

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayNode {
	pub id: String,
	pub label: String,
	pub group: NodeKind,
}

/// Resolved visual attributes for one edge. Every edge carries an explicit
/// color; the widget never inherits endpoint colors.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayEdge {
	pub from: String,
	pub to: String,
	pub color: &'static str,
	pub dashes: bool,
	pub arrow_to: bool,
	pub label: Option<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayGraph {
	pub nodes: Vec<DisplayNode>,
	pub edges: Vec<DisplayEdge>,
}

impl DisplayGraph {
	/// A display graph without nodes is not rendered, whatever its edges.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Derive the display graph for the current input, or an empty one when no
/// input graph has been supplied yet.
pub fn derive_display(graph: Option<&SchemaGraph>) -> DisplayGraph {
	graph.map(display_graph).unwrap_or_default()
}

/// Full recomputation: node and edge mappings in one synchronous pass. The
/// result replaces any previously derived graph wholesale.
pub fn display_graph(graph: &SchemaGraph) -> DisplayGraph {
	DisplayGraph {
		nodes: graph.nodes.iter().map(display_node).collect(),
		edges: graph.edges.iter().map(display_edge).collect(),
	}
}

fn display_node(node: &SchemaNode) -> DisplayNode {
	let label = match node.kind {
		// The operation vocabulary has two members upstream: union and
		// intersection. Anything that is not a union renders as "and".
		NodeKind::Operation if node.label == OPERATION_UNION => "or".into(),
		NodeKind::Operation => "and".into(),
		_ => node.label.clone(),
	};
	DisplayNode {
		id: node.id.clone(),
		label,
		group: node.kind,
	}
}

fn display_edge(edge: &SchemaEdge) -> DisplayEdge {
	let (color, dashes, arrow_to, label) = match edge.from.kind {
		NodeKind::Entity => (ENTITY_EDGE_COLOR, false, false, None),
		NodeKind::Relation => (RELATION_EDGE_COLOR, false, true, None),
		NodeKind::Permission => (PERMISSION_EDGE_COLOR, false, true, None),
		NodeKind::Operation => (
			OPERATION_EDGE_COLOR,
			edge.from.label == OPERATION_UNION,
			true,
			edge.negated.then_some("not"),
		),
	};
	DisplayEdge {
		from: edge.from.id.clone(),
		to: edge.to.id.clone(),
		color,
		dashes,
		arrow_to,
		label,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, label: &str, kind: NodeKind) -> SchemaNode {
		SchemaNode {
			id: id.into(),
			label: label.into(),
			kind,
		}
	}

	fn edge(from: SchemaNode, to: SchemaNode) -> SchemaEdge {
		SchemaEdge {
			from,
			to,
			negated: false,
		}
	}

	fn graph(nodes: Vec<SchemaNode>, edges: Vec<SchemaEdge>) -> SchemaGraph {
		SchemaGraph { nodes, edges }
	}

	#[test]
	fn union_operation_renders_or() {
		let g = graph(vec![node("1", OPERATION_UNION, NodeKind::Operation)], vec![]);
		assert_eq!(display_graph(&g).nodes[0].label, "or");
	}

	#[test]
	fn non_union_operations_render_and() {
		let g = graph(
			vec![
				node("1", "OPERATION_INTERSECTION", NodeKind::Operation),
				node("2", "OPERATION_INTERSECT", NodeKind::Operation),
			],
			vec![],
		);
		let d = display_graph(&g);
		assert_eq!(d.nodes[0].label, "and");
		assert_eq!(d.nodes[1].label, "and");
	}

	#[test]
	fn other_nodes_keep_label_and_mirror_kind() {
		let g = graph(vec![node("1", "Doc", NodeKind::Entity)], vec![]);
		let d = display_graph(&g);
		assert_eq!(
			d.nodes,
			vec![DisplayNode {
				id: "1".into(),
				label: "Doc".into(),
				group: NodeKind::Entity,
			}]
		);
		assert!(d.edges.is_empty());
		assert!(!d.is_empty());
	}

	#[test]
	fn groups_mirror_input_kinds() {
		let g = graph(
			vec![
				node("e", "document", NodeKind::Entity),
				node("r", "owner", NodeKind::Relation),
				node("p", "view", NodeKind::Permission),
				node("o", OPERATION_UNION, NodeKind::Operation),
			],
			vec![],
		);
		let groups: Vec<NodeKind> = display_graph(&g).nodes.iter().map(|n| n.group).collect();
		assert_eq!(
			groups,
			vec![
				NodeKind::Entity,
				NodeKind::Relation,
				NodeKind::Permission,
				NodeKind::Operation,
			]
		);
	}

	#[test]
	fn edges_keep_endpoint_ids() {
		let from = node("a", "document", NodeKind::Entity);
		let to = node("b", "owner", NodeKind::Relation);
		let g = graph(vec![from.clone(), to.clone()], vec![edge(from, to)]);
		let e = &display_graph(&g).edges[0];
		assert_eq!(e.from, "a");
		assert_eq!(e.to, "b");
	}

	#[test]
	fn entity_edges_suppress_arrow() {
		let from = node("a", "document", NodeKind::Entity);
		let to = node("b", "owner", NodeKind::Relation);
		let g = graph(vec![], vec![edge(from, to)]);
		let e = &display_graph(&g).edges[0];
		assert_eq!(e.color, "rgba(99,24,255,0.4)");
		assert!(!e.dashes);
		assert!(!e.arrow_to);
		assert_eq!(e.label, None);
	}

	#[test]
	fn relation_and_permission_edges_use_their_palette() {
		let rel = node("r", "parent", NodeKind::Relation);
		let perm = node("p", "view", NodeKind::Permission);
		let to = node("x", "organization", NodeKind::Entity);
		let g = graph(
			vec![],
			vec![edge(rel, to.clone()), edge(perm, to)],
		);
		let d = display_graph(&g);
		assert_eq!(d.edges[0].color, "rgba(147,241,238,0.4)");
		assert_eq!(d.edges[1].color, "rgba(91,204,99,0.4)");
		for e in &d.edges {
			assert!(!e.dashes);
			assert!(e.arrow_to);
			assert_eq!(e.label, None);
		}
	}

	#[test]
	fn union_edges_dash_and_others_do_not() {
		let union = node("u", OPERATION_UNION, NodeKind::Operation);
		let inter = node("i", "OPERATION_INTERSECTION", NodeKind::Operation);
		let to = node("x", "owner", NodeKind::Relation);
		let g = graph(
			vec![],
			vec![edge(union, to.clone()), edge(inter, to)],
		);
		let d = display_graph(&g);
		assert_eq!(d.edges[0].color, "rgba(229,52,114,0.4)");
		assert!(d.edges[0].dashes);
		assert_eq!(d.edges[1].color, "rgba(229,52,114,0.4)");
		assert!(!d.edges[1].dashes);
	}

	#[test]
	fn negated_operation_edges_carry_not_label() {
		let from = node("u", OPERATION_UNION, NodeKind::Operation);
		let to = node("x", "member", NodeKind::Relation);
		let mut e = edge(from, to);
		e.negated = true;
		let g = graph(vec![], vec![e]);
		assert_eq!(display_graph(&g).edges[0].label, Some("not"));
	}

	#[test]
	fn negation_only_labels_operation_edges() {
		let from = node("p", "view", NodeKind::Permission);
		let to = node("x", "owner", NodeKind::Relation);
		let mut e = edge(from, to);
		e.negated = true;
		let g = graph(vec![], vec![e]);
		assert_eq!(display_graph(&g).edges[0].label, None);
	}

	#[test]
	fn missing_input_derives_empty() {
		let d = derive_display(None);
		assert!(d.is_empty());
		assert!(d.edges.is_empty());
	}

	#[test]
	fn edges_alone_do_not_make_the_graph_renderable() {
		let from = node("a", "document", NodeKind::Entity);
		let to = node("b", "owner", NodeKind::Relation);
		let g = graph(vec![], vec![edge(from, to)]);
		let d = derive_display(Some(&g));
		assert!(d.is_empty());
		assert_eq!(d.edges.len(), 1);
	}

	#[test]
	fn transform_is_idempotent() {
		let from = node("u", OPERATION_UNION, NodeKind::Operation);
		let to = node("x", "owner", NodeKind::Relation);
		let g = graph(
			vec![from.clone(), to.clone()],
			vec![edge(from, to)],
		);
		assert_eq!(display_graph(&g), display_graph(&g));
	}
}
