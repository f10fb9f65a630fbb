use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::Surface;
use protocol::color::Color;

/// `Surface` backed by the 2d context of a canvas element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
			.dyn_into::<CanvasRenderingContext2d>()?;
		Ok(Self { canvas, ctx })
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, size: [u32; 2]) {
		self.canvas.set_width(size[0]);
		self.canvas.set_height(size[1]);
	}

	fn fill_rect(&mut self, origin: [f64; 2], size: [f64; 2], color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(origin[0], origin[1], size[0], size[1]);
	}

	fn fill_disc(&mut self, center: [f64; 2], radius: f64, color: Color) {
		self.ctx.begin_path();
		if let Err(e) = self.ctx.arc(center[0], center[1], radius, 0.0, TAU) {
			log::warn!("arc r={} rejected: {:?}", radius, e);
			return;
		}
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(
		&mut self,
		from: [f64; 2],
		to: [f64; 2],
		width: f64,
		color: Color,
	) {
		self.ctx.begin_path();
		self.ctx.move_to(from[0], from[1]);
		self.ctx.line_to(to[0], to[1]);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}
