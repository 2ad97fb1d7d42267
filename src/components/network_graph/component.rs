use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::frame_loop::{FrameLoop, WindowListener};
use super::render;
use super::state::{NetworkParams, NetworkState};
use super::types::{NetworkAgent, Vec2};

/// Animated agent network drawn on a canvas that fills its parent.
///
/// Clicking a node writes its agent id into `selected`; clicking empty space
/// clears it.
#[component]
pub fn NetworkGraphCanvas(
	#[prop(into)] agents: Signal<Vec<NetworkAgent>>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let frames = FrameLoop::default();
	let resize = Rc::new(WindowListener::default());
	let hovering = RwSignal::new(false);

	let teardown = StoredValue::new_local((frames.clone(), resize.clone()));
	on_cleanup(move || {
		teardown.try_with_value(|(frames, resize)| {
			frames.stop();
			resize.remove();
		});
	});

	let (state_init, frames_init, resize_init) = (state.clone(), frames, resize);
	Effect::new(move |_| {
		let agents = agents.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("no window; network graph disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("canvas has no 2d context; network graph disabled");
			return;
		};

		// a new graph must never be driven by the previous loop
		frames_init.stop();

		let (w, h) = measure(&canvas);
		fit_backing_store(&canvas, &ctx, w, h, window.device_pixel_ratio());

		let mut rng = ChaCha8Rng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
		*state_init.borrow_mut() = Some(NetworkState::new(
			&agents,
			w,
			h,
			&NetworkParams::default(),
			&mut rng,
		));
		selected.set(None);
		hovering.set(false);

		let (state_resize, canvas_resize, ctx_resize) =
			(state_init.clone(), canvas.clone(), ctx.clone());
		resize_init.attach(&window, "resize", move || {
			let (nw, nh) = measure(&canvas_resize);
			let dpr = web_sys::window().map_or(1.0, |win| win.device_pixel_ratio());
			fit_backing_store(&canvas_resize, &ctx_resize, nw, nh, dpr);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});

		let state_anim = state_init.clone();
		frames_init.start(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.has_area() {
					s.update();
					render::render(s, &ctx);
				}
			}
		});
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hit = s.pointer_moved(point);
			if hovering.get_untracked() != hit {
				hovering.set(hit);
			}
		}
	};

	let state_ck = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(point) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_ck.borrow_mut() {
			let id = s.clicked(point).map(|n| n.id.clone());
			selected.set(id);
		}
	};

	let state_ml = state;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_left();
		}
		hovering.set(false);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-graph-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			on:mouseleave=on_mouseleave
			style=move || {
				let cursor = if hovering.get() { "pointer" } else { "default" };
				format!("display: block; width: 100%; height: 100%; cursor: {cursor};")
			}
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Logical size of the canvas' container, or zero before layout.
fn measure(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|parent| {
			let rect = parent.get_bounding_client_rect();
			(rect.width(), rect.height())
		})
		.unwrap_or((0.0, 0.0))
}

/// Sizes the backing store in device pixels and scales the context back to
/// logical units, so drawing and hit-testing share one coordinate space.
fn fit_backing_store(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	dpr: f64,
) {
	let dpr = if dpr > 0.0 { dpr } else { 1.0 };
	canvas.set_width((width * dpr) as u32);
	canvas.set_height((height * dpr) as u32);
	// resizing the canvas resets the transform
	if let Err(err) = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
		warn!("failed to scale canvas for pixel ratio {dpr}: {err:?}");
	}
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Vec2> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Vec2::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
