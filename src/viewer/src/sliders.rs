use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use slider::SlideView;

use crate::error::{Error, Result};

/// Elements of one slider row, looked up fresh for every update.
pub struct SlideElements {
	nodes: Vec<HtmlElement>,
	dim_inactive: bool,
}

impl SlideElements {
	pub fn query(
		document: &Document,
		container_id: &str,
		selector: &str,
	) -> Result<Self> {
		let container = document
			.get_element_by_id(container_id)
			.ok_or_else(|| Error::MissingElement(container_id.to_string()))?;
		let list = container.query_selector_all(selector)?;
		let nodes = (0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
			.collect();
		Ok(Self {
			nodes,
			dim_inactive: false,
		})
	}

	/// Inactive elements also get a reduced inline opacity (used for dots).
	pub fn dimmed(mut self) -> Self {
		self.dim_inactive = true;
		self
	}
}

impl SlideView for SlideElements {
	fn len(&self) -> usize {
		self.nodes.len()
	}

	fn set_active(&mut self, index: usize, active: bool) {
		let Some(node) = self.nodes.get(index) else {
			return;
		};
		if let Err(e) = node.class_list().toggle_with_force("active", active) {
			log::warn!("toggle active: {:?}", e);
		}
		if self.dim_inactive {
			let opacity = if active { "1" } else { "0.5" };
			if let Err(e) = node.style().set_property("opacity", opacity) {
				log::warn!("set opacity: {:?}", e);
			}
		}
	}
}

/// Writes `current` to the slides under `#slider-<name>` and the dots under
/// `#dots-<name>`.
pub fn render(document: &Document, name: &str, current: usize) -> Result<()> {
	let mut slides =
		SlideElements::query(document, &format!("slider-{}", name), ".slider-slide")?;
	slider::apply(&mut slides, current);
	let mut dots =
		SlideElements::query(document, &format!("dots-{}", name), ".slider-dot")?
			.dimmed();
	slider::apply(&mut dots, current);
	Ok(())
}
