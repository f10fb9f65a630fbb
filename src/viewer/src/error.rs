use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no window")]
	NoWindow,
	#[error("no document")]
	NoDocument,
	#[error("element #{0} not found")]
	MissingElement(String),
	#[error("element #{0} is not a canvas")]
	NotACanvas(String),
	#[error("js error: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value));
		Self::Js(message)
	}
}

impl From<Error> for JsValue {
	fn from(e: Error) -> Self {
		JsValue::from_str(&e.to_string())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
