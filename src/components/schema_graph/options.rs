//! Static visual configuration and the interaction hook table handed to
//! the canvas widget. The view passes both through unchanged.

use force_graph::SimulationParameters;
use leptos::prelude::Callback;

use super::types::NodeKind;

/// Node fill colors by category, the solid counterparts of the edge
/// palette.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupPalette {
	pub entity: &'static str,
	pub relation: &'static str,
	pub permission: &'static str,
	pub operation: &'static str,
}

impl GroupPalette {
	pub fn color(&self, group: NodeKind) -> &'static str {
		match group {
			NodeKind::Entity => self.entity,
			NodeKind::Relation => self.relation,
			NodeKind::Permission => self.permission,
			NodeKind::Operation => self.operation,
		}
	}
}

impl Default for GroupPalette {
	fn default() -> Self {
		Self {
			entity: "#6318ff",
			relation: "#93f1ee",
			permission: "#5bcc63",
			operation: "#e53472",
		}
	}
}

/// Layout physics plus category styling. One static value per view; the
/// widget does not react to changes after mount.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphOptions {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub groups: GroupPalette,
}

impl Default for GraphOptions {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			groups: GroupPalette::default(),
		}
	}
}

impl GraphOptions {
	pub(crate) fn simulation_parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Hook table for widget interactions. All hooks default to unset; the
/// view currently installs none.
#[derive(Clone, Default)]
pub struct GraphEvents {
	pub on_node_select: Option<Callback<String>>,
}
