use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::V2;
use protocol::pr_model::{PrConnection, PrModel, PrPrimitive};
use protocol::user_event::UserEvent;
use protocol::view::View;

/// min(floor(width / spacing), max_particles)
pub fn particle_count(width: f64, config: &FieldConfig) -> usize {
	if !(config.spacing > 0.0) || !(width > 0.0) {
		return 0;
	}
	((width / config.spacing).floor() as usize).min(config.max_particles)
}

/// Line opacity for two particles `dist` apart, fading linearly to zero at
/// the link distance.
pub fn link_alpha(dist: f64, config: &FieldConfig) -> f64 {
	if dist >= config.link_distance {
		return 0.0;
	}
	(1.0 - dist / config.link_distance) * config.link_alpha
}

pub struct PField<R: Rng = StdRng> {
	config: FieldConfig,
	view: View,
	pointer: Option<V2>,
	particles: Vec<Particle>,
	rng: R,
}

impl PField<StdRng> {
	pub fn from_entropy(config: FieldConfig, view: View) -> Self {
		Self::new(config, view, StdRng::from_entropy())
	}
}

impl<R: Rng> PField<R> {
	pub fn new(config: FieldConfig, view: View, rng: R) -> Self {
		let mut result = Self {
			config,
			view,
			pointer: None,
			particles: Vec::new(),
			rng,
		};
		result.reset();
		result
	}

	pub fn view(&self) -> &View {
		&self.view
	}

	pub fn pointer(&self) -> Option<V2> {
		self.pointer
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
		&mut self.particles
	}

	/// Throws the current particles away and scatters a fresh set sized for
	/// the view width.
	pub fn reset(&mut self) {
		let count = particle_count(self.view.width(), &self.config);
		let particles = (0..count)
			.map(|_| Particle::random(&mut self.rng, &self.view, &self.config))
			.collect();
		self.particles = particles;
		log::debug!(
			"field reset: {} particles in {}x{}",
			count,
			self.view.width(),
			self.view.height()
		);
	}

	pub fn resize(&mut self, new_size: [u32; 2]) {
		self.view.resize(new_size);
		self.reset();
	}

	pub fn handle(&mut self, event: UserEvent) {
		match event {
			UserEvent::Resize(size) => self.resize(size),
			UserEvent::PointerMove(pos) => self.pointer = Some(V2::new(pos[0], pos[1])),
			UserEvent::PointerLeave => self.pointer = None,
		}
	}

	/// Advances every particle by one frame and returns the frame's draw
	/// list: the trail overlay, then each particle followed by its links to
	/// the particles after it. Those later particles have not moved yet in
	/// this frame.
	pub fn step(&mut self) -> PrModel {
		let mut model = PrModel::new(self.view.extent());
		model.push(PrPrimitive::Overlay(self.config.trail));
		for i in 0..self.particles.len() {
			let (head, tail) = self.particles.split_at_mut(i + 1);
			let particle = &mut head[i];
			particle.advance(&self.view);
			if let Some(pointer) = self.pointer {
				particle.attract(pointer, &self.config);
			}
			model.push(PrPrimitive::Particle(particle.render()));
			for other in tail.iter() {
				let dist = (particle.pos - other.pos).magnitude();
				if dist >= self.config.link_distance {
					continue;
				}
				model.push(PrPrimitive::Connection(PrConnection {
					from: [particle.pos[0], particle.pos[1]],
					to: [other.pos[0], other.pos[1]],
					width: self.config.link_width,
					color: self
						.config
						.link_color
						.with_alpha(link_alpha(dist, &self.config)),
				}));
			}
		}
		model
	}
}
