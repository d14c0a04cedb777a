//! Async driver for the list store.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::api::{ApiError, EntriesApi, DEFAULT_PAGE_SIZE};
use crate::catalog::{Entry, EntryId, EntryInput};
use crate::list::intent::ListIntent;
use crate::list::reducer::ListReducer;
use crate::list::state::ListState;
use crate::mvi::Reducer;

/// Result of a `load_more` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was appended.
    Loaded { count: usize },
    /// Nothing fetched: a fetch is already outstanding or no pages remain.
    Skipped,
    /// A page arrived after a reset and was dropped.
    Discarded,
}

/// A create or update that reached the backend.
///
/// The mutation and the reload that follows are reported separately: a
/// failed reload does not undo the saved entry.
#[derive(Debug)]
pub struct Saved {
    pub entry: Entry,
    pub reload: Result<LoadOutcome, ApiError>,
}

struct Inner {
    state: ListState,
    /// Bumped on every reset; tags outstanding fetches.
    epoch: u64,
}

/// Entries list bound to a backend.
///
/// Methods take `&self`; the state lock is never held across an
/// `.await`, so overlapping calls observe the `loading` guard.
pub struct EntryList<A> {
    api: A,
    page_size: u32,
    inner: Mutex<Inner>,
}

impl<A: EntriesApi> EntryList<A> {
    pub fn new(api: A) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, page_size: u32) -> Self {
        Self {
            api,
            page_size,
            inner: Mutex::new(Inner {
                state: ListState::default(),
                epoch: 0,
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ListState {
        self.inner.lock().state.clone()
    }

    fn dispatch(inner: &mut Inner, intent: ListIntent) {
        inner.state = ListReducer::reduce(std::mem::take(&mut inner.state), intent);
    }

    /// Fetches and appends the next page.
    ///
    /// A failed fetch leaves entries, cursor and `has_more` untouched and
    /// returns the error; calling again retries.
    pub async fn load_more(&self) -> Result<LoadOutcome, ApiError> {
        let (cursor, epoch) = {
            let mut inner = self.inner.lock();
            if !inner.state.can_load_more() {
                return Ok(LoadOutcome::Skipped);
            }
            Self::dispatch(&mut inner, ListIntent::LoadRequested);
            (inner.state.cursor, inner.epoch)
        };

        let result = self.api.list_page(cursor, self.page_size).await;

        let mut inner = self.inner.lock();
        if inner.epoch != epoch {
            match &result {
                Ok(_) => debug!(epoch, current = inner.epoch, "Dropping page fetched before reset"),
                Err(err) => warn!(
                    epoch,
                    current = inner.epoch,
                    error = %err,
                    "Page fetch failed after reset, discarding"
                ),
            }
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok(page) => {
                let count = page.items.len();
                Self::dispatch(&mut inner, ListIntent::PageLoaded(page));
                debug!(
                    count,
                    total = inner.state.len(),
                    has_more = inner.state.has_more,
                    "Page appended"
                );
                Ok(LoadOutcome::Loaded { count })
            }
            Err(err) => {
                Self::dispatch(&mut inner, ListIntent::LoadFailed);
                Err(err)
            }
        }
    }

    /// Loads pages until the backend reports no more.
    pub async fn load_all(&self) -> Result<(), ApiError> {
        loop {
            let outcome = self.load_more().await?;
            let has_more = self.inner.lock().state.has_more;
            if !matches!(outcome, LoadOutcome::Loaded { .. }) || !has_more {
                return Ok(());
            }
        }
    }

    /// Clears the list; the next `load_more` starts from the first page.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.epoch += 1;
        Self::dispatch(&mut inner, ListIntent::Reset);
    }

    /// Reset followed by a fetch of the first page.
    pub async fn reload(&self) -> Result<LoadOutcome, ApiError> {
        self.reset();
        self.load_more().await
    }

    /// Creates an entry, then reloads the list from the start.
    ///
    /// The store is untouched when the create fails. Once the entry
    /// exists, a failed reload is carried in [`Saved::reload`].
    pub async fn create(&self, input: &EntryInput) -> Result<Saved, ApiError> {
        let entry = self.api.create(input).await?;
        info!(id = %entry.id, title = %entry.title, "Entry created");
        Ok(self.saved(entry).await)
    }

    /// Updates an entry, then reloads the list from the start.
    pub async fn update(&self, id: EntryId, input: &EntryInput) -> Result<Saved, ApiError> {
        let entry = self.api.update(id, input).await?;
        info!(%id, title = %entry.title, "Entry updated");
        Ok(self.saved(entry).await)
    }

    async fn saved(&self, entry: Entry) -> Saved {
        let reload = self.reload().await;
        if let Err(err) = &reload {
            warn!(id = %entry.id, error = %err, "Reload after save failed");
        }
        Saved { entry, reload }
    }

    /// Deletes an entry and removes it from the list.
    ///
    /// On failure (including `NotFound`) the list is left as it was.
    pub async fn delete(&self, id: EntryId) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        let mut inner = self.inner.lock();
        Self::dispatch(&mut inner, ListIntent::EntryRemoved { id });
        info!(%id, "Entry deleted");
        Ok(())
    }
}
