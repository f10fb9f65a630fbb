use crate::surface::Surface;
use protocol::pr_model::{PrModel, PrPrimitive};
use protocol::view::View;

pub struct Renderer<S: Surface> {
	surface: S,
}

impl<S: Surface> Renderer<S> {
	pub fn new(surface: S) -> Self {
		Self { surface }
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn resize(&mut self, view: &View) {
		self.surface.resize(view.size());
	}

	pub fn draw(&mut self, pr_model: &PrModel) {
		for primitive in pr_model.primitives.iter() {
			match primitive {
				PrPrimitive::Overlay(color) => {
					self.surface.fill_rect([0.0, 0.0], pr_model.size, *color)
				}
				PrPrimitive::Particle(p) => {
					self.surface.fill_disc(p.pos, p.radius, p.color)
				}
				PrPrimitive::Connection(c) => {
					self.surface.stroke_line(c.from, c.to, c.width, c.color)
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Renderer;
	use crate::surface::Surface;
	use protocol::color::Color;
	use protocol::pr_model::{PrConnection, PrModel, PrParticle, PrPrimitive};
	use protocol::view::View;

	#[derive(Default)]
	struct Recorder {
		size: Option<[u32; 2]>,
		calls: Vec<String>,
	}

	impl Surface for Recorder {
		fn resize(&mut self, size: [u32; 2]) {
			self.size = Some(size);
		}

		fn fill_rect(&mut self, origin: [f64; 2], size: [f64; 2], color: Color) {
			self.calls
				.push(format!("rect {:?} {:?} {}", origin, size, color));
		}

		fn fill_disc(&mut self, center: [f64; 2], radius: f64, color: Color) {
			self.calls
				.push(format!("disc {:?} {} {}", center, radius, color));
		}

		fn stroke_line(
			&mut self,
			from: [f64; 2],
			to: [f64; 2],
			width: f64,
			color: Color,
		) {
			self.calls
				.push(format!("line {:?} {:?} {} {}", from, to, width, color));
		}
	}

	#[test]
	fn replays_primitives_in_order() {
		let mut model = PrModel::new([300.0, 200.0]);
		model.push(PrPrimitive::Overlay(Color::rgba(17, 24, 39, 0.1)));
		model.push(PrPrimitive::Particle(PrParticle {
			pos: [10.0, 20.0],
			radius: 2.0,
			color: Color::rgb(59, 130, 246),
		}));
		model.push(PrPrimitive::Connection(PrConnection {
			from: [10.0, 20.0],
			to: [40.0, 60.0],
			width: 0.5,
			color: Color::rgba(16, 185, 129, 0.2),
		}));
		let mut renderer = Renderer::new(Recorder::default());
		renderer.draw(&model);
		assert_eq!(
			renderer.surface().calls,
			[
				"rect [0.0, 0.0] [300.0, 200.0] rgba(17, 24, 39, 0.1)",
				"disc [10.0, 20.0] 2 #3b82f6",
				"line [10.0, 20.0] [40.0, 60.0] 0.5 rgba(16, 185, 129, 0.2)",
			]
		);
	}

	#[test]
	fn resize_forwards_view_size() {
		let mut renderer = Renderer::new(Recorder::default());
		renderer.resize(&View::new(960, 540));
		assert_eq!(renderer.surface().size, Some([960, 540]));
	}
}
