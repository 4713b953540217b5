//! Leptos component hosting the live editor on a canvas.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::controller::{InputEvent, Modifier, PointerButton};
use super::render;
use super::state::CanvasState;
use crate::config::{EditorConfig, MAX_VERTICES, MIN_VERTICES, VertexCount};
use crate::error::{EditorError, Result};

/// 2D context of a canvas element.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(|e| EditorError::Canvas(format!("{:?}", e)))?
		.ok_or_else(|| EditorError::Canvas("2d context unavailable".into()))?
		.dyn_into()
		.map_err(|_| EditorError::Canvas("context is not a CanvasRenderingContext2d".into()))
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn pointer_button(ev: &MouseEvent) -> PointerButton {
	match ev.button() {
		0 => PointerButton::Primary,
		2 => PointerButton::Secondary,
		_ => PointerButton::Other,
	}
}

fn key_modifier(key: &str) -> Option<Modifier> {
	match key {
		"Control" | "Meta" => Some(Modifier::Connect),
		"Alt" => Some(Modifier::Move),
		"Shift" => Some(Modifier::Remove),
		_ => None,
	}
}

/// Interactive editor: a canvas driven by the gesture controller plus the
/// vertex-count slider and Generate/Clear buttons.
#[component]
pub fn GraphEditorCanvas(
	config: EditorConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());
	let (vertex_count, set_vertex_count) = signal(config.vertex_count.get());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window available");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or(600.0),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("{}", err);
				return;
			}
		};
		*state_init.borrow_mut() = Some(CanvasState::new(&config, w, h));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.dirty {
					render::render(&s.frame(), &ctx);
					s.dirty = false;
				}
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let _ = canvas.focus();
		let (x, y) = canvas_point(&canvas, &ev);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.sync_modifiers(ev.ctrl_key() || ev.meta_key(), ev.alt_key(), ev.shift_key());
			let at = s.pointer(x, y);
			let effect = s.dispatch(InputEvent::PointerDown {
				button: pointer_button(&ev),
				at,
			});
			debug!("Pointer down at {:?}: {:?}", at, effect);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_point(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let at = s.pointer(x, y);
			s.dispatch(InputEvent::PointerMove { at });
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.dispatch(InputEvent::PointerUp { at: None });
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.dispatch(InputEvent::PointerUp { at: None });
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		let Some(modifier) = key_modifier(&ev.key()) else {
			return;
		};
		if modifier == Modifier::Move {
			ev.prevent_default();
		}
		if ev.repeat() {
			return;
		}
		if let Some(ref mut s) = *state_kd.borrow_mut() {
			s.dispatch(InputEvent::KeyDown(modifier));
		}
	};

	let state_ku = state.clone();
	let on_keyup = move |ev: KeyboardEvent| {
		let Some(modifier) = key_modifier(&ev.key()) else {
			return;
		};
		if let Some(ref mut s) = *state_ku.borrow_mut() {
			s.dispatch(InputEvent::KeyUp(modifier));
		}
	};

	let state_gen = state.clone();
	let on_generate = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_gen.borrow_mut() {
			s.generate(vertex_count.get_untracked());
		}
	};

	let state_clr = state.clone();
	let on_clear = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_clr.borrow_mut() {
			s.clear(vertex_count.get_untracked());
		}
	};

	view! {
		<div class="graph-editor">
			<canvas
				node_ref=canvas_ref
				class="graph-editor-canvas"
				tabindex="0"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:contextmenu=|ev: MouseEvent| ev.prevent_default()
				on:keydown=on_keydown
				on:keyup=on_keyup
				style="display: block; cursor: crosshair; outline: none;"
			/>
			<div class="graph-controls">
				<button on:click=on_clear>"Clear"</button>
				<label class="vertex-slider">
					"Number of Vertices "
					<input
						type="range"
						min=MIN_VERTICES.to_string()
						max=MAX_VERTICES.to_string()
						step="1"
						prop:value=move || vertex_count.get().to_string()
						on:input=move |ev| {
							if let Ok(n) = event_target_value(&ev).parse::<usize>() {
								set_vertex_count.set(VertexCount::clamped(n).get());
							}
						}
					/>
					<span>{move || vertex_count.get()}</span>
				</label>
				<button on:click=on_generate>"Generate Graph"</button>
			</div>
		</div>
	}
}
