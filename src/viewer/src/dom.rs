use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlCanvasElement, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
	web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
	window()?.document().ok_or(Error::NoDocument)
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| Error::MissingElement(id.to_string()))?
		.dyn_into::<HtmlCanvasElement>()
		.map_err(|_| Error::NotACanvas(id.to_string()))
}

/// Inner size of the browser viewport in css pixels.
pub fn viewport_size(window: &Window) -> Result<[u32; 2]> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok([width.max(0.0) as u32, height.max(0.0) as u32])
}

/// An event listener that stays attached for as long as this value lives.
pub struct Listener<T: ?Sized> {
	target: EventTarget,
	kind: &'static str,
	closure: Closure<T>,
}

impl<T: ?Sized> Listener<T> {
	pub fn attach(
		target: &EventTarget,
		kind: &'static str,
		closure: Closure<T>,
	) -> Result<Self> {
		target.add_event_listener_with_callback(
			kind,
			closure.as_ref().unchecked_ref(),
		)?;
		Ok(Self {
			target: target.clone(),
			kind,
			closure,
		})
	}
}

impl<T: ?Sized> Drop for Listener<T> {
	fn drop(&mut self) {
		let _ = self.target.remove_event_listener_with_callback(
			self.kind,
			self.closure.as_ref().unchecked_ref(),
		);
	}
}
