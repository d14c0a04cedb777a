//! Model-View-Intent (MVI) primitives.
//!
//! Both the entries list and the UI dialogs use these traits to keep
//! every state transition in one pure function.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot (entries list, form dialog)
//! - **Intent**: User actions or completed remote calls
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
