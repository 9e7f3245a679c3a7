use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, DragEvent, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent,
};

use crate::editor::{EditorShell, Position};

use super::render;
use super::state::SchemaCanvasState;
use super::types::{CanvasConfig, CanvasError};

type SharedState = Rc<RefCell<Option<SchemaCanvasState>>>;
type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Pointer position relative to the canvas element.
fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Position {
	let rect = canvas.get_bounding_client_rect();
	Position::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::NoContext)
}

fn mount(
	canvas: HtmlCanvasElement,
	shell: RwSignal<EditorShell>,
	config: CanvasConfig,
	state: SharedState,
	animate: Callback,
	resize_cb: Callback,
) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = parent_size(&canvas);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(&canvas)?;
	*state.borrow_mut() = Some(SchemaCanvasState::new(config, w, h));

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let (nw, nh) = parent_size(&canvas_resize);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(nw, nh);
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (state_anim, animate_inner) = (state.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		let alive = shell.try_with_untracked(|shell| {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				render::render(s, shell, &ctx);
			}
		});
		// owner disposed; stop the loop
		if alive.is_none() {
			return;
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

/// Pan/zoom canvas that draws the schema graph and turns pointer gestures
/// into [`EditorShell`] calls.
#[component]
pub fn SchemaCanvas(
	shell: RwSignal<EditorShell>,
	#[prop(optional)] config: CanvasConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));
	let locked = RwSignal::new(false);
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Err(err) = mount(
			canvas,
			shell,
			config.clone(),
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
		) {
			error!("canvas setup failed: {err}");
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let _ = canvas.focus();
		let p = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			shell.with_untracked(|sh| s.pointer_down(sh, p));
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let p = local_point(&canvas, &ev);
		let changes = match *state_mm.borrow_mut() {
			Some(ref mut s) => s.pointer_move(p),
			None => return,
		};
		if !changes.is_empty() {
			shell.update(|sh| sh.apply_node_changes(changes));
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let p = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			shell.update(|sh| s.pointer_up(sh, p));
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let p = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(p, factor);
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if !matches!(ev.key().as_str(), "Delete" | "Backspace") {
			return;
		}
		ev.prevent_default();
		let guard = state_kd.borrow();
		let Some(s) = guard.as_ref() else {
			return;
		};
		let (nodes, edges) = shell.with_untracked(|sh| s.deletion_changes(sh));
		if nodes.is_empty() && edges.is_empty() {
			return;
		}
		shell.update(|sh| {
			sh.apply_node_changes(nodes);
			sh.apply_edge_changes(edges);
		});
	};

	let on_dragover = move |ev: DragEvent| {
		ev.prevent_default();
		if let Some(transfer) = ev.data_transfer() {
			EditorShell::on_drag_over(&transfer);
		}
	};

	let state_dp = state.clone();
	let on_drop = move |ev: DragEvent| {
		ev.prevent_default();
		let (Some(canvas), Some(transfer)) = (canvas_ref.get(), ev.data_transfer()) else {
			return;
		};
		let p = local_point(&canvas, &ev);
		let transform = match *state_dp.borrow() {
			Some(ref s) => s.transform,
			None => return,
		};
		shell.update(|sh| {
			sh.on_drop(&transfer, p, &transform);
		});
	};

	let state_zi = state.clone();
	let zoom_in = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_zi.borrow_mut() {
			let step = s.config.zoom_step;
			s.zoom_by(step);
		}
	};

	let state_zo = state.clone();
	let zoom_out = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_zo.borrow_mut() {
			let step = s.config.zoom_step;
			s.zoom_by(1.0 / step);
		}
	};

	let state_fv = state.clone();
	let fit_view = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_fv.borrow_mut() {
			shell.with_untracked(|sh| s.fit_view(sh.store().nodes()));
		}
	};

	let state_lk = state.clone();
	let toggle_lock = move |_: MouseEvent| {
		locked.update(|l| *l = !*l);
		if let Some(ref mut s) = *state_lk.borrow_mut() {
			s.locked = locked.get_untracked();
		}
	};

	view! {
		<div class="schema-canvas">
			<canvas
				node_ref=canvas_ref
				tabindex="0"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				on:keydown=on_keydown
				on:dragover=on_dragover
				on:drop=on_drop
				style="display: block; cursor: grab; outline: none;"
			/>
			<div class="controls">
				<button title="zoom in" on:click=zoom_in>"+"</button>
				<button title="zoom out" on:click=zoom_out>"-"</button>
				<button title="fit view" on:click=fit_view>"fit"</button>
				<button title="toggle interactivity" on:click=toggle_lock>
					{move || if locked.get() { "locked" } else { "unlocked" }}
				</button>
			</div>
		</div>
	}
}
