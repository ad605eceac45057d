/// Label carried by set-union operation nodes. The upstream schema compiler
/// emits `OPERATION_*` labels; only the union is distinguished visually.
pub const OPERATION_UNION: &str = "OPERATION_UNION";

/// Category of a schema graph node. Styling and label rewriting are keyed
/// on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Entity,
	Relation,
	Permission,
	Operation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
}

/// Edge styling is keyed on the `from` endpoint, so edges carry whole
/// nodes rather than bare ids.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaEdge {
	pub from: SchemaNode,
	pub to: SchemaNode,
	pub negated: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaGraph {
	pub nodes: Vec<SchemaNode>,
	pub edges: Vec<SchemaEdge>,
}
