pub mod selector;
pub mod slide_view;

pub use selector::{SlideSelector, SliderState, DEFAULT_SLIDERS};
pub use slide_view::{apply, SlideView};
