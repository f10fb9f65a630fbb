use serde::{Deserialize, Serialize};

use protocol::color::Color;

pub const EMERALD: Color = Color::rgb(16, 185, 129);
pub const BLUE: Color = Color::rgb(59, 130, 246);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
	/// Viewport width (css px) per particle.
	pub spacing: f64,
	pub max_particles: usize,
	/// Per-axis bound of the initial velocity, in px per frame.
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_span: f64,
	pub palette: Vec<Color>,
	pub trail: Color,
	pub link_distance: f64,
	pub link_color: Color,
	pub link_alpha: f64,
	pub link_width: f64,
	pub pointer_radius: f64,
	pub pointer_gain: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			spacing: 30.0,
			max_particles: 100,
			max_speed: 0.25,
			radius_min: 1.0,
			radius_span: 2.0,
			palette: vec![EMERALD, BLUE],
			trail: Color::rgba(17, 24, 39, 0.1),
			link_distance: 150.0,
			link_color: EMERALD,
			link_alpha: 0.3,
			link_width: 0.5,
			pointer_radius: 150.0,
			pointer_gain: 0.0001,
		}
	}
}

impl FieldConfig {
	/// Missing keys fall back to the defaults.
	pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(s)
	}

	pub fn with_max_particles(mut self, max_particles: usize) -> Self {
		self.max_particles = max_particles;
		self
	}

	pub fn with_spacing(mut self, spacing: f64) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
		self.palette = palette;
		self
	}

	pub fn with_link_distance(mut self, d: f64) -> Self {
		self.link_distance = d;
		self
	}

	pub fn with_pointer(mut self, radius: f64, gain: f64) -> Self {
		self.pointer_radius = radius;
		self.pointer_gain = gain;
		self
	}
}
