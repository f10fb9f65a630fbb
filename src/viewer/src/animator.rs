use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, MouseEvent};

use canvasrender::{CanvasSurface, Renderer};
use field::{FieldConfig, PField};
use protocol::user_event::UserEvent;
use protocol::view::View;

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::frame::FrameLoop;

/// JSON overrides for `FieldConfig`, read from the canvas element.
pub const CONFIG_ATTRIBUTE: &str = "data-field-config";

pub fn config_for(canvas: &HtmlCanvasElement) -> FieldConfig {
	let Some(json) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
		return FieldConfig::default();
	};
	FieldConfig::from_json(&json).unwrap_or_else(|e| {
		log::warn!("{}: {}, using defaults", CONFIG_ATTRIBUTE, e);
		FieldConfig::default()
	})
}

/// Particle background bound to one canvas: owns the simulation, the
/// renderer, the frame loop and the listeners feeding it.
pub struct Animator {
	pfield: PField,
	renderer: Renderer<CanvasSurface>,
	frames: Option<FrameLoop>,
	_resize: Option<Listener<dyn FnMut()>>,
	_pointer_move: Option<Listener<dyn FnMut(MouseEvent)>>,
	_pointer_leave: Option<Listener<dyn FnMut()>>,
}

impl Animator {
	/// Sizes the canvas to `size` and scatters the initial particles.
	pub fn new(
		canvas: HtmlCanvasElement,
		config: FieldConfig,
		size: [u32; 2],
	) -> Result<Self> {
		let view = View::new(size[0], size[1]);
		let mut renderer = Renderer::new(CanvasSurface::new(canvas)?);
		renderer.resize(&view);
		Ok(Self {
			pfield: PField::from_entropy(config, view),
			renderer,
			frames: None,
			_resize: None,
			_pointer_move: None,
			_pointer_leave: None,
		})
	}

	pub fn pfield(&self) -> &PField {
		&self.pfield
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		self.renderer.surface().canvas()
	}

	pub fn is_running(&self) -> bool {
		self.frames.as_ref().map_or(false, FrameLoop::is_running)
	}

	pub fn handle(&mut self, event: UserEvent) {
		self.pfield.handle(event);
		if let UserEvent::Resize(_) = event {
			self.renderer.resize(self.pfield.view());
		}
	}

	pub fn render_frame(&mut self) {
		let pr_model = self.pfield.step();
		self.renderer.draw(&pr_model);
	}

	/// Attaches the listeners and schedules the first frame.
	pub fn start(self) -> Result<Rc<RefCell<Self>>> {
		let canvas = self.canvas().clone();
		let this = Rc::new(RefCell::new(self));
		Self::bind_events(&this, &canvas)?;

		let weak = Rc::downgrade(&this);
		let frames = FrameLoop::start(move || {
			with_animator(&weak, Animator::render_frame);
		})?;
		this.borrow_mut().frames = Some(frames);
		log::info!(
			"particle field running with {} particles",
			this.borrow().pfield.particles().len()
		);
		Ok(this)
	}

	/// Cancels the pending frame and detaches every listener.
	pub fn stop(&mut self) {
		if let Some(frames) = self.frames.take() {
			frames.stop();
		}
		self._resize = None;
		self._pointer_move = None;
		self._pointer_leave = None;
	}

	fn bind_events(
		this: &Rc<RefCell<Self>>,
		canvas: &HtmlCanvasElement,
	) -> Result<()> {
		let window = dom::window()?;

		let weak = Rc::downgrade(this);
		let resize = Closure::<dyn FnMut()>::new(move || {
			let size = match dom::window().and_then(|w| dom::viewport_size(&w)) {
				Ok(size) => size,
				Err(e) => {
					log::warn!("resize ignored: {}", e);
					return;
				}
			};
			with_animator(&weak, |a| a.handle(UserEvent::Resize(size)));
		});

		let weak = Rc::downgrade(this);
		let pointer_move =
			Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
				let pos = [e.client_x() as f64, e.client_y() as f64];
				with_animator(&weak, |a| a.handle(UserEvent::PointerMove(pos)));
			});

		let weak = Rc::downgrade(this);
		let pointer_leave = Closure::<dyn FnMut()>::new(move || {
			with_animator(&weak, |a| a.handle(UserEvent::PointerLeave));
		});

		let mut animator = this.borrow_mut();
		animator._resize = Some(Listener::attach(&window, "resize", resize)?);
		animator._pointer_move =
			Some(Listener::attach(canvas, "mousemove", pointer_move)?);
		animator._pointer_leave =
			Some(Listener::attach(canvas, "mouseleave", pointer_leave)?);
		Ok(())
	}
}

fn with_animator(weak: &Weak<RefCell<Animator>>, f: impl FnOnce(&mut Animator)) {
	let Some(animator) = weak.upgrade() else {
		return;
	};
	// already borrowed means we are re-entered from inside a frame
	if let Ok(mut animator) = animator.try_borrow_mut() {
		f(&mut animator);
	};
}
