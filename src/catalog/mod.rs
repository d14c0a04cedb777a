//! Catalogue data model: entries, payloads, pages and form drafts.

mod draft;
mod entry;

pub use draft::{DraftError, DraftField, EntryDraft};
pub use entry::{Entry, EntryId, EntryInput, EntryType, FieldError, PageResponse};
