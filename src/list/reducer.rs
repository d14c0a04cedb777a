use crate::list::intent::ListIntent;
use crate::list::state::ListState;
use crate::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::LoadRequested => {
                if state.can_load_more() {
                    ListState {
                        loading: true,
                        ..state
                    }
                } else {
                    state
                }
            }
            ListIntent::PageLoaded(page) => {
                if !state.loading {
                    // Nothing outstanding: the page belongs to a fetch from before a reset.
                    return state;
                }
                let ListState { mut entries, .. } = state;
                let has_more = page.next_cursor.is_some() && !page.items.is_empty();
                entries.extend(page.items);
                ListState {
                    entries,
                    cursor: page.next_cursor,
                    has_more,
                    loading: false,
                }
            }
            ListIntent::LoadFailed => ListState {
                loading: false,
                ..state
            },
            ListIntent::EntryRemoved { id } => {
                let ListState {
                    mut entries,
                    cursor,
                    has_more,
                    loading,
                } = state;
                entries.retain(|entry| entry.id != id);
                ListState {
                    entries,
                    cursor,
                    has_more,
                    loading,
                }
            }
            ListIntent::Reset => ListState::default(),
        }
    }
}
