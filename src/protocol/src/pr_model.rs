// pr_model: one simulated frame, flattened into draw order

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f64; 2],
	pub radius: f64,
	pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrConnection {
	pub from: [f64; 2],
	pub to: [f64; 2],
	pub width: f64,
	pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrPrimitive {
	/// Translucent fill over the whole surface.
	Overlay(Color),
	Particle(PrParticle),
	Connection(PrConnection),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub size: [f64; 2],
	pub primitives: Vec<PrPrimitive>,
}

impl PrModel {
	pub fn new(size: [f64; 2]) -> Self {
		Self {
			size,
			primitives: Vec::new(),
		}
	}

	pub fn push(&mut self, primitive: PrPrimitive) {
		self.primitives.push(primitive);
	}

	pub fn particles(&self) -> impl Iterator<Item = &PrParticle> {
		self.primitives.iter().filter_map(|p| match p {
			PrPrimitive::Particle(x) => Some(x),
			_ => None,
		})
	}

	pub fn connections(&self) -> impl Iterator<Item = &PrConnection> {
		self.primitives.iter().filter_map(|p| match p {
			PrPrimitive::Connection(x) => Some(x),
			_ => None,
		})
	}
}
