use fnv::FnvHashMap;

/// Widgets present on the landing page, all with four slides.
pub const DEFAULT_SLIDERS: [(&str, usize); 3] =
	[("ultrasharp", 4), ("animesharp", 4), ("dreamforge", 4)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
	current: usize,
	total: usize,
}

impl SliderState {
	/// `None` for an empty slider, which has no valid index.
	pub fn new(total: usize) -> Option<Self> {
		if total == 0 {
			return None;
		}
		Some(Self { current: 0, total })
	}

	pub fn current(&self) -> usize {
		self.current
	}

	// out-of-range requests stick to the nearest end, no wrap
	fn set(&mut self, index: usize) -> usize {
		self.current = index.min(self.total - 1);
		self.current
	}
}

#[derive(Debug, Default)]
pub struct SlideSelector {
	sliders: FnvHashMap<String, SliderState>,
}

impl SlideSelector {
	pub fn with_defaults() -> Self {
		let mut result = Self::default();
		for (name, total) in DEFAULT_SLIDERS {
			result.register(name, total);
		}
		result
	}

	/// Adds (or resets) a widget. Returns false for `total == 0`.
	pub fn register(&mut self, name: &str, total: usize) -> bool {
		match SliderState::new(total) {
			Some(state) => {
				self.sliders.insert(name.to_string(), state);
				true
			}
			None => {
				log::warn!("slider {}: ignoring empty slider", name);
				false
			}
		}
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.sliders.keys().map(String::as_str)
	}

	pub fn get(&self, name: &str) -> Option<SliderState> {
		self.sliders.get(name).copied()
	}

	pub fn current(&self, name: &str) -> Option<usize> {
		self.get(name).map(|s| s.current())
	}

	/// Selects `index` (clamped) and returns the resulting index, or `None`
	/// when the widget is unknown.
	pub fn show(&mut self, name: &str, index: usize) -> Option<usize> {
		self.sliders.get_mut(name).map(|s| s.set(index))
	}

	pub fn next(&mut self, name: &str) -> Option<usize> {
		let current = self.current(name)?;
		self.show(name, current.saturating_add(1))
	}

	pub fn prev(&mut self, name: &str) -> Option<usize> {
		let current = self.current(name)?;
		self.show(name, current.saturating_sub(1))
	}
}
