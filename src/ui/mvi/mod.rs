//! Model-View-Intent (MVI) primitives for the settings panel.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Table / text fields
//!    ↑                                    │
//!    └──────── cell edits, buttons ───────┘
//! ```
//!
//! - **State**: everything the panel shows, including the committed baseline
//! - **Intent**: a single user edit or button press
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
