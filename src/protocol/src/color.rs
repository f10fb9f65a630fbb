use std::fmt;

use serde::{Deserialize, Serialize};

/// sRGB color with straight alpha, written to the canvas as a css string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
	pub fn parse(s: &str) -> Option<Self> {
		let s = s.trim();
		if let Some(hex) = s.strip_prefix('#') {
			return Self::parse_hex(hex);
		}
		let (body, has_alpha) = if let Some(body) = s.strip_prefix("rgba(") {
			(body, true)
		} else if let Some(body) = s.strip_prefix("rgb(") {
			(body, false)
		} else {
			return None;
		};
		let parts: Vec<&str> =
			body.strip_suffix(')')?.split(',').map(str::trim).collect();
		if parts.len() != if has_alpha { 4 } else { 3 } {
			return None;
		}
		let r = parts[0].parse().ok()?;
		let g = parts[1].parse().ok()?;
		let b = parts[2].parse().ok()?;
		let a = if has_alpha {
			let a: f64 = parts[3].parse().ok()?;
			if !(0.0..=1.0).contains(&a) {
				return None;
			}
			a
		} else {
			1.0
		};
		Some(Self { r, g, b, a })
	}

	fn parse_hex(hex: &str) -> Option<Self> {
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match hex.len() {
			3 => {
				let r = channel(&hex[0..1])?;
				let g = channel(&hex[1..2])?;
				let b = channel(&hex[2..3])?;
				Some(Self::rgb(r * 17, g * 17, b * 17))
			}
			6 => Some(Self::rgb(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			_ => None,
		}
	}

	pub fn to_css(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.a >= 1.0 {
			write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		Self::parse(&s).ok_or_else(|| format!("invalid color: {}", s))
	}
}

impl From<Color> for String {
	fn from(c: Color) -> Self {
		c.to_css()
	}
}
