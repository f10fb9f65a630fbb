//! requestAnimationFrame loop whose pending request is tracked by an
//! explicit handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::error::Result;

/// Id of a pending animation frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(i32);

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<FrameHandle> {
	let id = dom::window()?.request_animation_frame(f.as_ref().unchecked_ref())?;
	Ok(FrameHandle(id))
}

pub fn cancel_animation_frame(handle: FrameHandle) -> Result<()> {
	dom::window()?.cancel_animation_frame(handle.0)?;
	Ok(())
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `tick` once per display refresh until stopped or dropped.
pub struct FrameLoop {
	callback: Callback,
	pending: Rc<Cell<Option<FrameHandle>>>,
}

impl FrameLoop {
	pub fn start<F>(mut tick: F) -> Result<Self>
	where
		F: FnMut() + 'static,
	{
		let callback: Callback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));

		let inner = callback.clone();
		let next = pending.clone();
		let closure: Closure<dyn FnMut()> = Closure::new(move || {
			next.set(None);
			tick();
			let Ok(slot) = inner.try_borrow() else {
				return;
			};
			// cleared by stop()
			if let Some(f) = slot.as_ref() {
				match request_animation_frame(f) {
					Ok(handle) => next.set(Some(handle)),
					Err(e) => log::error!("frame loop halted: {}", e),
				}
			}
		});

		pending.set(Some(request_animation_frame(&closure)?));
		*callback.borrow_mut() = Some(closure);
		Ok(Self { callback, pending })
	}

	pub fn pending(&self) -> Option<FrameHandle> {
		self.pending.get()
	}

	pub fn is_running(&self) -> bool {
		self.callback
			.try_borrow()
			.map(|slot| slot.is_some())
			.unwrap_or(true)
	}

	/// Cancels the pending request and releases the callback.
	pub fn stop(&self) {
		if let Some(handle) = self.pending.take() {
			if let Err(e) = cancel_animation_frame(handle) {
				log::warn!("cancel {:?}: {}", handle, e);
			}
		}
		if let Ok(mut slot) = self.callback.try_borrow_mut() {
			slot.take();
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
