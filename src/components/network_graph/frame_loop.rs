use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

type Step = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop that can be withdrawn.
#[derive(Clone, Default)]
pub struct FrameLoop {
	step: Step,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Runs `frame` once per display refresh, replacing any running loop.
	pub fn start(&self, mut frame: impl FnMut() + 'static) {
		self.stop();
		let (step, pending) = (self.step.clone(), self.pending.clone());
		*self.step.borrow_mut() = Some(Closure::new(move || {
			pending.set(None);
			frame();
			pending.set(schedule(&step));
		}));
		self.pending.set(schedule(&self.step));
	}

	/// Cancels the pending frame and drops the step closure.
	pub fn stop(&self) {
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// breaks the closure's reference to itself
		self.step.borrow_mut().take();
	}
}

fn schedule(step: &Step) -> Option<i32> {
	let window = web_sys::window()?;
	let step = step.borrow();
	let cb = step.as_ref()?;
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(id) => Some(id),
		Err(err) => {
			warn!("requestAnimationFrame failed: {err:?}");
			None
		}
	}
}

/// Window event listener that detaches on `remove`.
#[derive(Default)]
pub struct WindowListener {
	attached: RefCell<Option<(&'static str, Closure<dyn FnMut()>)>>,
}

impl WindowListener {
	pub fn attach(&self, window: &Window, event: &'static str, handler: impl FnMut() + 'static) {
		self.remove();
		let cb: Closure<dyn FnMut()> = Closure::new(handler);
		if let Err(err) = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
		{
			warn!("failed to listen for {event}: {err:?}");
			return;
		}
		*self.attached.borrow_mut() = Some((event, cb));
	}

	pub fn remove(&self) {
		let Some((event, cb)) = self.attached.borrow_mut().take() else {
			return;
		};
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}
	}
}
