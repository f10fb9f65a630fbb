use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use field::{FieldConfig, PField};
use protocol::user_event::UserEvent;
use protocol::view::View;

fn main() {
	let frames = std::env::args()
		.nth(1)
		.and_then(|s| s.parse().ok())
		.unwrap_or(600usize);
	let mut pfield = PField::new(
		FieldConfig::default(),
		View::new(3840, 2160),
		StdRng::seed_from_u64(0),
	);
	pfield.handle(UserEvent::PointerMove([1920.0, 1080.0]));
	let start = Instant::now();
	let mut links = 0;
	for _ in 0..frames {
		links += pfield.step().connections().count();
	}
	let duration = start.elapsed().as_micros();
	eprintln!(
		"{} particles, {} frames: {:.1}us/frame, {:.1} links/frame",
		pfield.particles().len(),
		frames,
		duration as f64 / frames as f64,
		links as f64 / frames as f64,
	);
}
