use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use slider::SlideSelector;

use crate::animator::{self, Animator};
use crate::dom;
use crate::error::{Error, Result};
use crate::icons::IconHook;
use crate::sliders;

pub const CANVAS_ID: &str = "neuralCanvas";

/// Everything the landing page runs: the particle background (when the page
/// has a canvas for it) and the slide selectors.
pub struct Viewer {
	document: Document,
	animator: Option<Rc<RefCell<Animator>>>,
	sliders: SlideSelector,
}

impl Viewer {
	/// Page-ready setup. Missing elements disable their feature without
	/// complaint.
	pub fn setup(
		window: &Window,
		document: Document,
		icons: Option<IconHook>,
	) -> Self {
		let animator = match Self::start_background(window, &document) {
			Ok(animator) => Some(animator),
			Err(Error::MissingElement(_)) => None,
			Err(e) => {
				log::error!("particle background disabled: {}", e);
				None
			}
		};
		if let Some(hook) = icons {
			if let Err(e) = hook.replace() {
				log::warn!("icon replace failed: {}", e);
			}
		}
		let result = Self {
			document,
			animator,
			sliders: SlideSelector::with_defaults(),
		};
		let names: Vec<String> = result.sliders.names().map(String::from).collect();
		for name in names {
			if let Some(current) = result.sliders.current(&name) {
				result.render(&name, current);
			}
		}
		result
	}

	fn start_background(
		window: &Window,
		document: &Document,
	) -> Result<Rc<RefCell<Animator>>> {
		let canvas = dom::canvas_by_id(document, CANVAS_ID)?;
		let config = animator::config_for(&canvas);
		Animator::new(canvas, config, dom::viewport_size(window)?)?.start()
	}

	pub fn show(&mut self, name: &str, index: usize) -> Option<usize> {
		let current = self.sliders.show(name, index)?;
		self.render(name, current);
		Some(current)
	}

	pub fn next(&mut self, name: &str) -> Option<usize> {
		let current = self.sliders.next(name)?;
		self.render(name, current);
		Some(current)
	}

	pub fn prev(&mut self, name: &str) -> Option<usize> {
		let current = self.sliders.prev(name)?;
		self.render(name, current);
		Some(current)
	}

	fn render(&self, name: &str, current: usize) {
		match sliders::render(&self.document, name, current) {
			Ok(()) | Err(Error::MissingElement(_)) => {}
			Err(e) => log::warn!("slider {}: {}", name, e),
		}
	}

	/// Stops the background; the canvas keeps its last frame.
	pub fn stop(&mut self) {
		if let Some(animator) = self.animator.take() {
			if let Ok(mut animator) = animator.try_borrow_mut() {
				animator.stop();
			}
		}
	}
}
