//! Seam between the list store and the backend.

use async_trait::async_trait;

use super::error::ApiError;
use crate::catalog::{Entry, EntryId, EntryInput, PageResponse};

/// Default number of entries requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The four operations of the entries collection.
///
/// Implementations hold no state besides their connection details and
/// never retry: one call is at most one request.
#[async_trait]
pub trait EntriesApi: Send + Sync {
    /// Fetches the page starting at `cursor` (the first page when `None`).
    ///
    /// `limit` must be greater than zero.
    async fn list_page(&self, cursor: Option<i64>, limit: u32) -> Result<PageResponse, ApiError>;

    /// Creates an entry and returns it with its assigned id.
    async fn create(&self, input: &EntryInput) -> Result<Entry, ApiError>;

    /// Replaces the entry `id` with `input`.
    async fn update(&self, id: EntryId, input: &EntryInput) -> Result<Entry, ApiError>;

    /// Deletes the entry `id`. A missing id is [`ApiError::NotFound`].
    async fn delete(&self, id: EntryId) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: EntriesApi + ?Sized> EntriesApi for std::sync::Arc<T> {
    async fn list_page(&self, cursor: Option<i64>, limit: u32) -> Result<PageResponse, ApiError> {
        (**self).list_page(cursor, limit).await
    }

    async fn create(&self, input: &EntryInput) -> Result<Entry, ApiError> {
        (**self).create(input).await
    }

    async fn update(&self, id: EntryId, input: &EntryInput) -> Result<Entry, ApiError> {
        (**self).update(id, input).await
    }

    async fn delete(&self, id: EntryId) -> Result<(), ApiError> {
        (**self).delete(id).await
    }
}
