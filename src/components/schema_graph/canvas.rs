use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::draw;
use super::options::{GraphEvents, GraphOptions};
use super::state::CanvasState;
use super::transform::DisplayGraph;

fn cursor_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Force-directed canvas widget for a display graph. The simulation is
/// rebuilt from scratch whenever the graph signal changes; interaction is
/// drag, pan and zoom, with node selection routed through `events`.
#[component]
pub fn SchemaGraphCanvas(
	#[prop(into)] graph: Signal<DisplayGraph>,
	#[prop(default = GraphOptions::default())] options: GraphOptions,
	#[prop(default = GraphEvents::default())] events: GraphEvents,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Rc::new(Cell::new(true));
	let (state_init, animate_init, alive_anim) = (state.clone(), animate.clone(), alive.clone());

	Effect::new(move |_| {
		let display = graph.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		debug!(
			"rebuilding simulation: {} nodes, {} edges",
			display.nodes.len(),
			display.edges.len()
		);
		*state_init.borrow_mut() = Some(CanvasState::new(&display, &options, w, h));

		// The draw loop survives graph changes; only start it once.
		if animate_init.borrow().is_some() {
			return;
		}

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let (state_anim, animate_inner, alive_inner) = (
			state_init.clone(),
			animate_init.clone(),
			alive_anim.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_inner.get() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				draw::draw(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let alive_cleanup = alive.clone();
	on_cleanup(move || {
		// Stops the loop from rescheduling itself after unmount.
		alive_cleanup.set(false);
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = cursor_position(&canvas, &ev);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				if let Some(hook) = &events.on_node_select {
					if let Some(id) = s.node_id(idx) {
						hook.run(id);
					}
				}
				if let Some((nx, ny)) = s.node_position(idx) {
					s.drag.active = true;
					s.drag.node_idx = Some(idx);
					s.drag.start_x = x;
					s.drag.start_y = y;
					s.drag.node_start_x = nx;
					s.drag.node_start_y = ny;
				}
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = cursor_position(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					s.move_node(
						idx,
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let end_interaction = move || {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};
	let end_up = end_interaction.clone();
	let on_mouseup = move |_: MouseEvent| end_up();
	let on_mouseleave = move |_: MouseEvent| end_interaction();

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = cursor_position(&canvas, &ev);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="schema-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
