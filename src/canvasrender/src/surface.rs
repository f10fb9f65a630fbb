use protocol::color::Color;

/// Minimal 2d drawing target a `Renderer` replays frames onto.
pub trait Surface {
	/// Resize the backing store, in css pixels.
	fn resize(&mut self, size: [u32; 2]);

	fn fill_rect(&mut self, origin: [f64; 2], size: [f64; 2], color: Color);

	fn fill_disc(&mut self, center: [f64; 2], radius: f64, color: Color);

	fn stroke_line(
		&mut self,
		from: [f64; 2],
		to: [f64; 2],
		width: f64,
		color: Color,
	);
}
