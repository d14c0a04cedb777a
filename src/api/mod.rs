//! Remote data client for the entries collection.
//!
//! [`EntriesApi`] is the seam the list store talks to; [`ApiClient`] is
//! its HTTP implementation.

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use traits::{EntriesApi, DEFAULT_PAGE_SIZE};
