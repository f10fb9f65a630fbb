use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{FieldConfig, EMERALD};
use crate::V2;
use protocol::color::Color;
use protocol::pr_model::PrParticle;
use protocol::view::View;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub pos: V2,
	pub vel: V2,
	pub radius: f64,
	pub color: Color,
}

impl Particle {
	pub fn new(pos: V2, vel: V2, radius: f64, color: Color) -> Self {
		Self {
			pos,
			vel,
			radius,
			color,
		}
	}

	pub fn random<R: Rng + ?Sized>(
		rng: &mut R,
		view: &View,
		config: &FieldConfig,
	) -> Self {
		let pos = V2::new(
			rng.gen::<f64>() * view.width(),
			rng.gen::<f64>() * view.height(),
		);
		let vel = V2::new(
			(rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed,
			(rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed,
		);
		let radius = config.radius_min + rng.gen::<f64>() * config.radius_span;
		let color = config.palette.choose(rng).copied().unwrap_or(EMERALD);
		Self::new(pos, vel, radius, color)
	}

	/// Moves by one frame of velocity. A coordinate that leaves the view is
	/// mirrored back across the crossed edge and its velocity component flips.
	pub fn advance(&mut self, view: &View) {
		self.pos += self.vel;
		let extent = view.extent();
		for axis in 0..2 {
			let limit = extent[axis];
			if self.pos[axis] < 0.0 {
				self.pos[axis] = -self.pos[axis];
				self.vel[axis] = -self.vel[axis];
			} else if self.pos[axis] > limit {
				self.pos[axis] = 2.0 * limit - self.pos[axis];
				self.vel[axis] = -self.vel[axis];
			}
			// overshoot larger than the view itself
			self.pos[axis] = self.pos[axis].clamp(0.0, limit);
		}
	}

	/// Pulls the velocity toward `pointer` when it is within reach.
	pub fn attract(&mut self, pointer: V2, config: &FieldConfig) -> bool {
		let d = pointer - self.pos;
		if d.magnitude() >= config.pointer_radius {
			return false;
		}
		self.vel += d * config.pointer_gain;
		true
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			radius: self.radius,
			color: self.color,
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	use super::Particle;
	use crate::config::{FieldConfig, BLUE, EMERALD};
	use crate::V2;
	use protocol::view::View;

	fn at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle::new(V2::new(x, y), V2::new(vx, vy), 1.0, EMERALD)
	}

	#[test]
	fn random_particles_respect_ranges() {
		let mut rng = StdRng::seed_from_u64(7);
		let view = View::new(640, 480);
		let config = FieldConfig::default();
		for _ in 0..500 {
			let p = Particle::random(&mut rng, &view, &config);
			assert!(view.contains(p.pos));
			assert!(p.vel[0].abs() <= 0.25 && p.vel[1].abs() <= 0.25);
			assert!((1.0..3.0).contains(&p.radius));
			assert!(p.color == EMERALD || p.color == BLUE);
		}
	}

	#[test]
	fn palette_override_and_empty_fallback() {
		let mut rng = StdRng::seed_from_u64(11);
		let view = View::new(200, 200);
		let blue = FieldConfig::default().with_palette(vec![BLUE]);
		for _ in 0..50 {
			assert_eq!(Particle::random(&mut rng, &view, &blue).color, BLUE);
		}
		let empty = FieldConfig::default().with_palette(Vec::new());
		assert_eq!(Particle::random(&mut rng, &view, &empty).color, EMERALD);
	}

	#[test]
	fn crossing_an_edge_reflects() {
		let view = View::new(100, 100);
		let mut p = at(0.1, 50.0, -0.3, 0.0);
		p.advance(&view);
		assert!(p.vel[0] > 0.0);
		assert!((p.pos[0] - 0.2).abs() < 1e-9);

		let mut p = at(50.0, 99.9, 0.0, 0.4);
		p.advance(&view);
		assert!(p.vel[1] < 0.0);
		assert!(view.contains(p.pos));
	}

	#[test]
	fn huge_overshoot_is_clamped() {
		let view = View::new(10, 10);
		let mut p = at(5.0, 5.0, 40.0, -40.0);
		p.advance(&view);
		assert!(view.contains(p.pos));
	}

	#[test]
	fn pointer_in_reach_nudges_velocity() {
		let config = FieldConfig::default();
		let mut p = at(500.0, 400.0, 0.0, 0.0);
		assert!(p.attract(V2::new(500.0, 500.0), &config));
		assert_eq!(p.vel[0], 0.0);
		assert!((p.vel[1] - 0.01).abs() < 1e-12);
	}

	#[test]
	fn pointer_out_of_reach_is_ignored() {
		let config = FieldConfig::default();
		let mut p = at(0.0, 0.0, 0.1, 0.1);
		assert!(!p.attract(V2::new(150.0, 0.0), &config));
		assert_eq!(p.vel, V2::new(0.1, 0.1));
	}
}
