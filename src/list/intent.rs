use crate::catalog::{EntryId, PageResponse};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Start fetching the next page. No-op while loading or exhausted.
    LoadRequested,
    /// The outstanding page fetch succeeded.
    PageLoaded(PageResponse),
    /// The outstanding page fetch failed.
    LoadFailed,
    /// The entry was deleted remotely.
    EntryRemoved { id: EntryId },
    /// Back to the initial state, ahead of a full reload.
    Reset,
}

impl Intent for ListIntent {}
