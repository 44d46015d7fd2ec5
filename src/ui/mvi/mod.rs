//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs to draw a widget
//! - **Intent**: a navigation key press or a finished fetch
//! - **Reducer**: pure `(State, Intent) -> State`; side effects such as
//!   spawning requests or touching view handles stay with the caller

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
