use leptos::prelude::*;

use crate::components::schema_graph::{
	NodeKind, OPERATION_UNION, SchemaEdge, SchemaGraph, SchemaGraphView, SchemaNode,
};

fn node(id: &str, label: &str, kind: NodeKind) -> SchemaNode {
	SchemaNode {
		id: id.into(),
		label: label.into(),
		kind,
	}
}

fn edge(from: &SchemaNode, to: &SchemaNode) -> SchemaEdge {
	SchemaEdge {
		from: from.clone(),
		to: to.clone(),
		negated: false,
	}
}

/// Sample schema: a document service with organization-scoped permissions.
/// `view` is owner-or-admin; `edit` is owner-and-not-member.
fn sample_schema() -> SchemaGraph {
	let organization = node("organization", "organization", NodeKind::Entity);
	let document = node("document", "document", NodeKind::Entity);
	let admin = node("organization#admin", "admin", NodeKind::Relation);
	let member = node("organization#member", "member", NodeKind::Relation);
	let owner = node("document#owner", "owner", NodeKind::Relation);
	let org = node("document#org", "org", NodeKind::Relation);
	let view = node("document#view", "view", NodeKind::Permission);
	let edit = node("document#edit", "edit", NodeKind::Permission);
	let view_or = node("document#view#or", OPERATION_UNION, NodeKind::Operation);
	let edit_and = node(
		"document#edit#and",
		"OPERATION_INTERSECTION",
		NodeKind::Operation,
	);

	let mut not_member = edge(&edit_and, &member);
	not_member.negated = true;

	SchemaGraph {
		edges: vec![
			edge(&organization, &admin),
			edge(&organization, &member),
			edge(&document, &owner),
			edge(&document, &org),
			edge(&document, &view),
			edge(&document, &edit),
			edge(&org, &organization),
			edge(&view, &view_or),
			edge(&view_or, &owner),
			edge(&view_or, &admin),
			edge(&edit, &edit_and),
			edge(&edit_and, &owner),
			not_member,
		],
		nodes: vec![
			organization,
			document,
			admin,
			member,
			owner,
			org,
			view,
			edit,
			view_or,
			edit_and,
		],
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (graph, set_graph) = signal(Some(sample_schema()));
	let toggle = move |_| {
		set_graph.update(|g| {
			*g = if g.is_some() {
				None
			} else {
				Some(sample_schema())
			}
		});
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-overlay">
					<h1>"Schema Graph"</h1>
					<p class="subtitle">
						"Drag nodes to reposition. Scroll to zoom. Drag background to pan."
					</p>
					<button on:click=toggle>
						{move || if graph.read().is_some() { "Clear schema" } else { "Load sample schema" }}
					</button>
				</div>
				<SchemaGraphView graph=graph />
			</div>
		</ErrorBoundary>
	}
}
