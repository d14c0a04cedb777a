//! List reconciliation store.
//!
//! Keeps an append-only, fetch-ordered view of the remote collection
//! with a pagination cursor. [`ListReducer`] owns every transition;
//! [`EntryList`] drives it against an [`EntriesApi`](crate::api::EntriesApi).

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{EntryList, LoadOutcome, Saved};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ListState;
