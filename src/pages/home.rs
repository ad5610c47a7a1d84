use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlInputElement;

use crate::components::workflow_canvas::WorkflowCanvas;
use crate::storage::{BrowserStorage, download_json, read_file_text};
use crate::workflow::{
	History, NOTICE_TTL_MS, NoticeBoard, NoticeKind, PROVIDERS, WorkflowError, WorkflowGraph,
	from_json, graph_connections, load_workflow, provider, save_workflow, spawn_position, to_json,
};

/// Queues a sweep for shortly after the current notice expires. A
/// superseding notice carries a later expiry, so a stale timer firing
/// early leaves it alone.
fn schedule_sweep(notices: RwSignal<NoticeBoard>) {
	let cb = Closure::once_into_js(move || {
		notices.update(|board| {
			board.sweep(js_sys::Date::now());
		});
	});
	let _ = web_sys::window()
		.unwrap()
		.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.unchecked_ref(),
			NOTICE_TTL_MS as i32 + 25,
		);
}

/// Payment workflow editor page
#[component]
pub fn Home() -> impl IntoView {
	let graph = RwSignal::new(WorkflowGraph::seeded());
	let history = RwSignal::new(History::new());
	let selected = RwSignal::new(String::new());
	let notices = RwSignal::new(NoticeBoard::new());
	let highlights = Memo::new(move |_| {
		let selected_id = selected.get();
		graph.with(|g| graph_connections(g, &selected_id))
	});

	// restore whatever the last session saved; a fresh browser starts
	// from the seeded root
	Effect::new(move |_| {
		match BrowserStorage::open().and_then(|store| load_workflow(&store)) {
			Ok(saved) => graph.update(|g| g.replace(saved)),
			Err(WorkflowError::EmptyPersistedData) => {}
			Err(err) => warn!("Could not restore saved workflow: {err}"),
		}
	});

	let post_notice = move |kind: NoticeKind, text: String| {
		notices.update(|board| board.post(kind, text, js_sys::Date::now()));
		schedule_sweep(notices);
	};

	let record = move || history.update(|h| h.record(graph.get_untracked()));

	// picking a provider adds it on first pick; either way it becomes
	// the selection
	let on_pick = move |ev: web_sys::Event| {
		let picked = event_target_value(&ev);
		if let Some(entry) = provider(&picked) {
			let seq = graph.with_untracked(|g| g.nodes.len());
			let mut added = false;
			graph.update(|g| added = g.add_node(entry.to_node(spawn_position(seq))));
			if added {
				record();
			}
		}
		selected.set(picked);
	};

	let on_select = Callback::new(move |id: String| selected.set(id));

	let on_connect = Callback::new(move |(source, target): (String, String)| {
		let mut outcome = Ok(false);
		graph.update(|g| outcome = g.add_edge(&source, &target));
		match outcome {
			Ok(true) => record(),
			Ok(false) => {}
			Err(err) => post_notice(NoticeKind::Error, err.to_string()),
		}
	});

	let on_remove = Callback::new(move |id: String| {
		let mut removed = false;
		graph.update(|g| removed = g.remove_node(&id));
		if removed {
			record();
			if selected.get_untracked() == id {
				selected.set(String::new());
			}
		}
	});

	let on_move = Callback::new(move |(id, x, y): (String, f64, f64)| {
		graph.update(|g| {
			g.move_node(&id, x, y);
		});
	});

	let on_undo = move |_| {
		let mut snapshot = None;
		history.update(|h| snapshot = h.undo());
		if let Some(snapshot) = snapshot {
			graph.update(|g| g.replace(snapshot));
		}
	};

	let on_redo = move |_| {
		let mut snapshot = None;
		history.update(|h| snapshot = h.redo());
		if let Some(snapshot) = snapshot {
			graph.update(|g| g.replace(snapshot));
		}
	};

	let on_save = move |_| {
		let result = BrowserStorage::open()
			.and_then(|store| graph.with_untracked(|g| save_workflow(&store, g)));
		match result {
			Ok(()) => post_notice(NoticeKind::Info, "Workflow saved!".to_string()),
			Err(err) => post_notice(NoticeKind::Error, err.to_string()),
		}
	};

	let on_load = move |_| {
		match BrowserStorage::open().and_then(|store| load_workflow(&store)) {
			Ok(saved) => {
				graph.update(|g| g.replace(saved));
				post_notice(NoticeKind::Info, "Workflow loaded!".to_string());
			}
			Err(err @ WorkflowError::EmptyPersistedData) => {
				post_notice(NoticeKind::Info, err.to_string());
			}
			Err(err) => post_notice(NoticeKind::Error, err.to_string()),
		}
	};

	let on_export = move |_| {
		match graph.with_untracked(to_json) {
			Ok(json) => {
				if download_json(&json, "workflow.json").is_err() {
					warn!("Export download failed");
				}
			}
			Err(err) => post_notice(NoticeKind::Error, err.to_string()),
		}
	};

	let on_import = move |ev: web_sys::Event| {
		let input = ev
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
		let Some(input) = input else {
			return;
		};
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		// allow re-importing the same file later
		input.set_value("");
		read_file_text(&file, move |text| match from_json(&text) {
			Ok(imported) => {
				graph.update(|g| g.replace(imported));
				post_notice(NoticeKind::Info, "Workflow imported successfully!".to_string());
			}
			Err(err) => post_notice(NoticeKind::Error, err.to_string()),
		});
	};

	view! {
		<div class="editor-layout">
			<div class="picker-panel">
				<p>"Please Select Payment Provider"</p>
				<select class="provider-select" prop:value=selected on:change=on_pick>
					<option value="">"Select"</option>
					{PROVIDERS
						.iter()
						.map(|entry| view! { <option value=entry.id>{entry.label}</option> })
						.collect_view()}
				</select>

				<div class="toolbar">
					<button
						on:click=on_undo
						prop:disabled=move || history.with(|h| !h.can_undo())
					>
						"Undo"
					</button>
					<button
						on:click=on_redo
						prop:disabled=move || history.with(|h| !h.can_redo())
					>
						"Redo"
					</button>
					<button on:click=on_save>"Save Workflow"</button>
					<button on:click=on_load>"Load Workflow"</button>
				</div>
				<div class="toolbar">
					<button on:click=on_export>"Export Workflow"</button>
					<input type="file" accept="application/json,.json" on:change=on_import />
				</div>

				{move || {
					notices.with(|board| {
						board.current().map(|notice| {
							let class = match notice.kind {
								NoticeKind::Error => "notice notice-error",
								NoticeKind::Info => "notice notice-info",
							};
							view! { <div class=class>{notice.text.clone()}</div> }
						})
					})
				}}
			</div>

			<div class="canvas-panel">
				<WorkflowCanvas
					graph=graph
					highlights=highlights
					selected=selected
					on_select=on_select
					on_connect=on_connect
					on_remove=on_remove
					on_move=on_move
				/>
			</div>
		</div>
	}
}
