//! Landing page runtime: neural particle background and model slide
//! selectors, exported to the page through wasm-bindgen.

pub mod animator;
pub mod dom;
pub mod error;
pub mod frame;
pub mod icons;
pub mod sliders;
pub mod viewer;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use icons::{IconHook, ICON_GLOBAL};
use viewer::Viewer;

thread_local! {
	static VIEWER: RefCell<Option<Viewer>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	console_log::init_with_level(log::Level::Info).ok();

	let document = dom::document()?;
	if document.ready_state() == "loading" {
		let on_ready = Closure::once_into_js(move || {
			if let Err(e) = setup() {
				log::error!("setup failed: {}", e);
			}
		});
		document.add_event_listener_with_callback(
			"DOMContentLoaded",
			on_ready.unchecked_ref(),
		)?;
	} else {
		setup()?;
	}
	Ok(())
}

fn setup() -> error::Result<()> {
	let window = dom::window()?;
	let document = window.document().ok_or(error::Error::NoDocument)?;
	let icons = IconHook::lookup(&window, ICON_GLOBAL);
	let viewer = Viewer::setup(&window, document, icons);
	VIEWER.with(|slot| *slot.borrow_mut() = Some(viewer));
	Ok(())
}

fn with_viewer<T>(f: impl FnOnce(&mut Viewer) -> Option<T>) -> Option<T> {
	VIEWER.with(|slot| slot.try_borrow_mut().ok()?.as_mut().and_then(f))
}

// negative requests from the page clamp to the first slide
fn slide_index(index: i32) -> usize {
	index.max(0) as usize
}

/// Selects slide `index` of slider `name`; returns the index actually shown.
#[wasm_bindgen(js_name = showSlide)]
pub fn show_slide(name: &str, index: i32) -> Option<u32> {
	with_viewer(|v| v.show(name, slide_index(index))).map(|i| i as u32)
}

#[wasm_bindgen(js_name = nextSlide)]
pub fn next_slide(name: &str) -> Option<u32> {
	with_viewer(|v| v.next(name)).map(|i| i as u32)
}

#[wasm_bindgen(js_name = prevSlide)]
pub fn prev_slide(name: &str) -> Option<u32> {
	with_viewer(|v| v.prev(name)).map(|i| i as u32)
}

#[wasm_bindgen(js_name = stopBackground)]
pub fn stop_background() {
	with_viewer(|v| {
		v.stop();
		Some(())
	});
}
