//! Browser tests, run with `wasm-pack test --headless --firefox src/viewer`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use field::FieldConfig;
use protocol::user_event::UserEvent;
use viewer::animator::{config_for, Animator, CONFIG_ATTRIBUTE};
use viewer::dom;
use viewer::frame::FrameLoop;
use viewer::icons::IconHook;
use viewer::sliders;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	dom::document().unwrap()
}

fn canvas() -> HtmlCanvasElement {
	let canvas = document()
		.create_element("canvas")
		.unwrap()
		.dyn_into::<HtmlCanvasElement>()
		.unwrap();
	document().body().unwrap().append_child(&canvas).unwrap();
	canvas
}

fn row(id: &str, class: &str, n: usize) -> Vec<HtmlElement> {
	let doc = document();
	let container = doc.create_element("div").unwrap();
	container.set_id(id);
	let mut items = Vec::new();
	for _ in 0..n {
		let item = doc
			.create_element("div")
			.unwrap()
			.dyn_into::<HtmlElement>()
			.unwrap();
		item.set_class_name(class);
		container.append_child(&item).unwrap();
		items.push(item);
	}
	doc.body().unwrap().append_child(&container).unwrap();
	items
}

#[wasm_bindgen_test]
fn animator_sizes_canvas_and_tracks_resize() {
	let canvas = canvas();
	let mut animator =
		Animator::new(canvas.clone(), FieldConfig::default(), [960, 400]).unwrap();
	assert_eq!(canvas.width(), 960);
	assert_eq!(canvas.height(), 400);
	assert_eq!(animator.pfield().particles().len(), 32);

	animator.render_frame();
	animator.handle(UserEvent::Resize([300, 200]));
	assert_eq!(canvas.width(), 300);
	assert_eq!(animator.pfield().particles().len(), 10);
}

#[wasm_bindgen_test]
fn started_animator_stops() {
	let animator = Animator::new(canvas(), FieldConfig::default(), [600, 300])
		.unwrap()
		.start()
		.unwrap();
	assert!(animator.borrow().is_running());
	animator.borrow_mut().stop();
	assert!(!animator.borrow().is_running());
}

#[wasm_bindgen_test]
fn config_attribute_overrides_defaults() {
	let canvas = canvas();
	assert_eq!(config_for(&canvas), FieldConfig::default());
	canvas
		.set_attribute(CONFIG_ATTRIBUTE, r#"{"maxParticles": 5}"#)
		.unwrap();
	assert_eq!(config_for(&canvas).max_particles, 5);
	canvas.set_attribute(CONFIG_ATTRIBUTE, "{not json").unwrap();
	assert_eq!(config_for(&canvas), FieldConfig::default());
}

#[wasm_bindgen_test]
fn frame_loop_cancels_pending_request() {
	let ticks = Rc::new(Cell::new(0));
	let counter = ticks.clone();
	let frames = FrameLoop::start(move || counter.set(counter.get() + 1)).unwrap();
	assert!(frames.pending().is_some());
	frames.stop();
	assert!(frames.pending().is_none());
	assert!(!frames.is_running());
	assert_eq!(ticks.get(), 0);
}

#[wasm_bindgen_test]
fn slider_render_marks_one_active() {
	let slides = row("slider-test", "slider-slide", 4);
	let dots = row("dots-test", "slider-dot", 4);
	sliders::render(&document(), "test", 2).unwrap();
	let active: Vec<bool> = slides
		.iter()
		.map(|s| s.class_list().contains("active"))
		.collect();
	assert_eq!(active, [false, false, true, false]);
	for (i, dot) in dots.iter().enumerate() {
		let opacity = dot.style().get_property_value("opacity").unwrap();
		assert_eq!(opacity, if i == 2 { "1" } else { "0.5" });
		assert_eq!(dot.class_list().contains("active"), i == 2);
	}
}

#[wasm_bindgen_test]
fn slider_render_without_markup_is_missing_element() {
	let result = sliders::render(&document(), "nowhere", 0);
	assert!(matches!(result, Err(viewer::error::Error::MissingElement(_))));
}

#[wasm_bindgen_test]
fn icon_hook_is_optional() {
	let scope = Object::new();
	assert!(IconHook::lookup(&scope, "icons").is_none());

	let library = Object::new();
	let replace = Function::new_no_args("this.called = true;");
	Reflect::set(&library, &"replace".into(), &replace).unwrap();
	Reflect::set(&scope, &"icons".into(), &library).unwrap();

	let hook = IconHook::lookup(&scope, "icons").unwrap();
	hook.replace().unwrap();
	let called = Reflect::get(&library, &"called".into()).unwrap();
	assert_eq!(called, JsValue::TRUE);
}
