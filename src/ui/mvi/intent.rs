/// Marker trait for intents: user navigation or completed background work.
pub trait Intent: Send + 'static {}
