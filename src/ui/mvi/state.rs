/// Marker trait for widget state.
///
/// `Default` lets dispatch move the state out with `std::mem::take`;
/// `PartialEq` lets callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
