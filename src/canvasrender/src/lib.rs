pub mod canvas;
pub mod renderer;
pub mod surface;

pub use canvas::CanvasSurface;
pub use renderer::Renderer;
pub use surface::Surface;
