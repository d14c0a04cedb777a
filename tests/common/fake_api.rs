//! Scripted in-process `EntriesApi` for store and app tests.

#![allow(dead_code)]

use async_trait::async_trait;
use favreel::api::{ApiError, EntriesApi};
use favreel::catalog::{Entry, EntryId, EntryInput, PageResponse};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// A call observed by [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPage { cursor: Option<i64>, limit: u32 },
    Create { title: String },
    Update { id: EntryId, title: String },
    Delete { id: EntryId },
}

/// Replays queued results in order. Unscripted calls succeed: an empty
/// final page, a created/updated entry echoing the input, or a delete.
#[derive(Default)]
pub struct FakeApi {
    pages: Mutex<VecDeque<Result<PageResponse, ApiError>>>,
    saves: Mutex<VecDeque<Result<(), ApiError>>>,
    deletes: Mutex<VecDeque<Result<(), ApiError>>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<i64>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1000),
            ..Self::default()
        }
    }

    pub fn push_page(&self, page: PageResponse) -> &Self {
        self.pages.lock().push_back(Ok(page));
        self
    }

    pub fn push_page_error(&self, err: ApiError) -> &Self {
        self.pages.lock().push_back(Err(err));
        self
    }

    pub fn push_save_error(&self, err: ApiError) -> &Self {
        self.saves.lock().push_back(Err(err));
        self
    }

    pub fn push_delete_result(&self, result: Result<(), ApiError>) -> &Self {
        self.deletes.lock().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, Call::ListPage { .. }))
            .count()
    }

    fn echo(&self, id: Option<EntryId>, input: &EntryInput) -> Entry {
        let id = id.unwrap_or_else(|| {
            let mut next = self.next_id.lock();
            *next += 1;
            EntryId(*next)
        });
        Entry {
            id,
            title: input.title.clone(),
            kind: input.kind,
            director: input.director.clone(),
            budget: input.budget,
            location: input.location.clone(),
            duration: input.duration,
            year_time: input.year_time.clone(),
            poster_url: input.poster_url.clone(),
            notes: input.notes.clone(),
        }
    }
}

#[async_trait]
impl EntriesApi for FakeApi {
    async fn list_page(&self, cursor: Option<i64>, limit: u32) -> Result<PageResponse, ApiError> {
        self.calls.lock().push(Call::ListPage { cursor, limit });
        // Give overlapping callers a chance to run while this fetch is "in flight".
        tokio::task::yield_now().await;
        self.pages.lock().pop_front().unwrap_or_else(|| Ok(PageResponse::default()))
    }

    async fn create(&self, input: &EntryInput) -> Result<Entry, ApiError> {
        self.calls.lock().push(Call::Create {
            title: input.title.clone(),
        });
        tokio::task::yield_now().await;
        let scripted = self.saves.lock().pop_front();
        match scripted {
            Some(Err(err)) => Err(err),
            _ => Ok(self.echo(None, input)),
        }
    }

    async fn update(&self, id: EntryId, input: &EntryInput) -> Result<Entry, ApiError> {
        self.calls.lock().push(Call::Update {
            id,
            title: input.title.clone(),
        });
        tokio::task::yield_now().await;
        let scripted = self.saves.lock().pop_front();
        match scripted {
            Some(Err(err)) => Err(err),
            _ => Ok(self.echo(Some(id), input)),
        }
    }

    async fn delete(&self, id: EntryId) -> Result<(), ApiError> {
        self.calls.lock().push(Call::Delete { id });
        tokio::task::yield_now().await;
        self.deletes.lock().pop_front().unwrap_or(Ok(()))
    }
}
