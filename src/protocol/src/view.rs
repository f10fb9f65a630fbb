use crate::V2;

/// Drawing surface extent. Particle coordinates live in `[0, w] x [0, h]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
	size: [u32; 2],
}

impl Default for View {
	fn default() -> Self {
		Self { size: [1280, 720] }
	}
}

impl View {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			size: [width, height],
		}
	}

	pub fn resize(&mut self, new_size: [u32; 2]) {
		self.size = new_size;
	}

	pub fn size(&self) -> [u32; 2] {
		self.size
	}

	pub fn width(&self) -> f64 {
		self.size[0] as f64
	}

	pub fn height(&self) -> f64 {
		self.size[1] as f64
	}

	pub fn extent(&self) -> [f64; 2] {
		[self.width(), self.height()]
	}

	pub fn contains(&self, pos: V2) -> bool {
		(0.0..=self.width()).contains(&pos[0])
			&& (0.0..=self.height()).contains(&pos[1])
	}
}
