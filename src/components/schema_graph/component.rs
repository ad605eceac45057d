use leptos::prelude::*;

use super::canvas::SchemaGraphCanvas;
use super::options::{GraphEvents, GraphOptions};
use super::transform::derive_display;
use super::types::SchemaGraph;

/// Height of the graph panel; the canvas sizes itself to fill it.
const PANEL_HEIGHT: &str = "85vh";

/// Renders an authorization schema graph. The display graph is derived in
/// full from the input signal on every change, and the widget is only
/// mounted once the derived node set is non-empty; until then the panel
/// stays blank. `None` resets the view to the blank panel.
#[component]
pub fn SchemaGraphView(
	#[prop(into)] graph: Signal<Option<SchemaGraph>>,
	#[prop(default = GraphOptions::default())] options: GraphOptions,
) -> impl IntoView {
	let display = Memo::new(move |_| graph.with(|g| derive_display(g.as_ref())));

	view! {
		<div class="schema-graph-panel" style=format!("height: {PANEL_HEIGHT};")>
			<Show when=move || display.with(|d| !d.is_empty())>
				<SchemaGraphCanvas
					graph=display
					options=options.clone()
					events=GraphEvents::default()
				/>
			</Show>
		</div>
	}
}
