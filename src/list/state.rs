use crate::catalog::{Entry, EntryId};
use crate::mvi::UiState;

/// In-memory view of the entries collection.
///
/// `entries` keeps fetch order. `cursor` is the last `nextCursor` seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub entries: Vec<Entry>,
    pub cursor: Option<i64>,
    pub has_more: bool,
    pub loading: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            has_more: true,
            loading: false,
        }
    }
}

impl UiState for ListState {}

impl ListState {
    /// True when a `LoadRequested` would start a fetch.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = ListState::default();
        assert!(state.entries.is_empty());
        assert!(state.cursor.is_none());
        assert!(state.has_more);
        assert!(!state.loading);
        assert!(state.can_load_more());
    }
}
