use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::scene::{DragState, Hit, LinkState, PanState, SceneState};
use crate::workflow::{Highlights, WorkflowGraph};

#[component]
pub fn WorkflowCanvas(
	#[prop(into)] graph: Signal<WorkflowGraph>,
	#[prop(into)] highlights: Signal<Highlights>,
	#[prop(into)] selected: Signal<String>,
	#[prop(into)] on_select: Callback<String>,
	#[prop(into)] on_connect: Callback<(String, String)>,
	#[prop(into)] on_remove: Callback<String>,
	#[prop(into)] on_move: Callback<(String, f64, f64)>,
	#[prop(default = 900.0)] width: f64,
	#[prop(default = 700.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SceneState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() =
			Some(graph.with_untracked(|g| SceneState::new(g, width, height)));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
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

	// graph, highlight, and selection changes flow into the scene without
	// touching the view transform
	let state_sync = state.clone();
	Effect::new(move |_| {
		let current = graph.get();
		let marks = highlights.get();
		let selected_id = selected.get();
		if let Some(ref mut s) = *state_sync.borrow_mut() {
			s.sync(&current, &marks, &selected_id);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let mut removed = None;
		let mut picked = None;
		if let Some(ref mut s) = *state_md.borrow_mut() {
			match s.hit(x, y) {
				Some(Hit::Close(idx)) => {
					removed = Some(s.nodes[idx].id.clone());
				}
				Some(Hit::Handle(idx)) => {
					let (gx, gy) = s.screen_to_graph(x, y);
					s.link.active = true;
					s.link.source_idx = Some(idx);
					s.link.to_x = gx;
					s.link.to_y = gy;
				}
				Some(Hit::Body(idx)) => {
					picked = Some(s.nodes[idx].id.clone());
					s.drag.active = true;
					s.drag.node_idx = Some(idx);
					s.drag.start_x = x;
					s.drag.start_y = y;
					s.drag.node_start_x = s.nodes[idx].x;
					s.drag.node_start_y = s.nodes[idx].y;
					s.drag.moved = false;
				}
				None => {
					s.pan.active = true;
					s.pan.start_x = x;
					s.pan.start_y = y;
					s.pan.transform_start_x = s.transform.x;
					s.pan.transform_start_y = s.transform.y;
					s.pan.moved = false;
				}
			}
		}
		// callbacks run after the scene borrow is released
		if let Some(id) = removed {
			on_remove.run(id);
		}
		if let Some(id) = picked {
			on_select.run(id);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					// a few px of slack keeps plain clicks from nudging the card
					if !s.drag.moved && (x - s.drag.start_x).hypot(y - s.drag.start_y) > 3.0 {
						s.drag.moved = true;
					}
					if s.drag.moved {
						s.nodes[idx].x = s.drag.node_start_x + (x - s.drag.start_x) / s.transform.k;
						s.nodes[idx].y = s.drag.node_start_y + (y - s.drag.start_y) / s.transform.k;
					}
				}
			} else if s.link.active {
				let (gx, gy) = s.screen_to_graph(x, y);
				s.link.to_x = gx;
				s.link.to_y = gy;
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
				if !s.pan.moved && (x - s.pan.start_x).hypot(y - s.pan.start_y) > 3.0 {
					s.pan.moved = true;
				}
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let mut connect = None;
		let mut dropped = None;
		let mut clear_selection = false;
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.link.active {
				if let (Some(src), Some(tgt)) = (s.link.source_idx, s.node_at(x, y)) {
					if src != tgt {
						connect = Some((s.nodes[src].id.clone(), s.nodes[tgt].id.clone()));
					}
				}
				s.link = LinkState::default();
			} else if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					if s.drag.moved {
						dropped = Some((s.nodes[idx].id.clone(), s.nodes[idx].x, s.nodes[idx].y));
					}
				}
				s.drag = DragState::default();
			} else if s.pan.active {
				if !s.pan.moved {
					clear_selection = true;
				}
				s.pan = PanState::default();
			}
		}
		if let Some(pair) = connect {
			on_connect.run(pair);
		}
		if let Some(drop) = dropped {
			on_move.run(drop);
		}
		if clear_selection {
			on_select.run(String::new());
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag = DragState::default();
			s.pan = PanState::default();
			s.link = LinkState::default();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="workflow-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
