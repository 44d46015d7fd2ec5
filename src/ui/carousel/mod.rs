//! Carousel feature module.
//!
//! Cycles through a fixed list of images and, while the exchange-rate image
//! is shown, loads and displays the rate table.
//!
//! # Architecture
//!
//! - `state.rs` - index, table visibility, rows and the latest request number
//! - `intent.rs` - navigation and fetch events
//! - `reducer.rs` - pure state transitions
//! - `view.rs` - the element handles the controller writes to
//! - `loader.rs` - spawns fetches and reports their outcome
//! - `controller.rs` - glues the above together; owns all side effects

mod controller;
mod intent;
mod loader;
mod reducer;
mod state;
mod view;

pub use controller::CarouselController;
pub use intent::CarouselIntent;
pub use loader::{FetchOutcome, OutcomeNotifier, RateLoader};
pub use reducer::CarouselReducer;
pub use state::{CarouselError, CarouselState};
pub use view::CarouselView;
