/// Notifications the host page forwards to the particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UserEvent {
	/// New viewport size in css pixels.
	Resize([u32; 2]),
	PointerMove([f64; 2]),
	PointerLeave,
}
