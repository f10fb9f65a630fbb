use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::Result;

/// Global name of the icon library, when the page loads one.
pub const ICON_GLOBAL: &str = "feather";

/// `replace()` of an icon library that swaps placeholder tags for svg.
pub struct IconHook {
	target: JsValue,
	replace: Function,
}

impl IconHook {
	/// Finds `<global>.replace` on `scope`; `None` when the library is absent.
	pub fn lookup(scope: &JsValue, global: &str) -> Option<Self> {
		let target = Reflect::get(scope, &JsValue::from_str(global)).ok()?;
		if target.is_undefined() || target.is_null() {
			return None;
		}
		let replace = Reflect::get(&target, &JsValue::from_str("replace"))
			.ok()?
			.dyn_into::<Function>()
			.ok()?;
		Some(Self { target, replace })
	}

	pub fn replace(&self) -> Result<()> {
		self.replace.call0(&self.target)?;
		Ok(())
	}
}
