mod canvas;
mod component;
mod draw;
mod options;
mod state;
mod transform;
mod types;

pub use canvas::SchemaGraphCanvas;
pub use component::SchemaGraphView;
pub use options::{GraphEvents, GraphOptions, GroupPalette};
pub use transform::{DisplayEdge, DisplayGraph, DisplayNode, derive_display, display_graph};
pub use types::{NodeKind, OPERATION_UNION, SchemaEdge, SchemaGraph, SchemaNode};
