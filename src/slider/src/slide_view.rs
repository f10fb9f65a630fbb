/// A row of toggleable elements, such as the slides or the dots of a widget.
pub trait SlideView {
	fn len(&self) -> usize;

	fn set_active(&mut self, index: usize, active: bool);

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Marks `current` active and every other element inactive.
pub fn apply<V: SlideView + ?Sized>(view: &mut V, current: usize) {
	for i in 0..view.len() {
		view.set_active(i, i == current);
	}
}
