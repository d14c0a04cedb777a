use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::{parse_validation_body, ApiError};
use super::traits::EntriesApi;
use crate::catalog::{Entry, EntryId, EntryInput, FieldError, PageResponse};
use crate::config::ApiConfig;

const ENTRIES_PATH: &str = "/entries";

/// reqwest-backed client for the entries collection.
///
/// Holds only the HTTP client and the base URL; no caching, no retries.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(
            &config.base_url,
            Duration::from_secs(u64::from(config.connect_timeout_seconds)),
        )
    }

    pub fn with_timeout(base_url: &str, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .default_headers(headers)
            .user_agent(format!("favreel/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ENTRIES_PATH)
    }

    fn entry_url(&self, id: EntryId) -> String {
        format!("{}{}/{}", self.base_url, ENTRIES_PATH, id)
    }
}

#[async_trait]
impl EntriesApi for ApiClient {
    async fn list_page(&self, cursor: Option<i64>, limit: u32) -> Result<PageResponse, ApiError> {
        if limit == 0 {
            return Err(ApiError::local_validation(vec![FieldError::new(
                "limit",
                "Limit must be greater than zero",
            )]));
        }

        debug!(cursor = ?cursor, limit, "Fetching entries page");

        let mut request = self.http.get(self.collection_url()).query(&[("limit", limit)]);
        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor)]);
        }

        let result = async {
            let response = check_status(request.send().await?, None).await?;
            decode::<PageResponse>(response).await
        }
        .await;

        match &result {
            Ok(page) => debug!(
                count = page.items.len(),
                next_cursor = ?page.next_cursor,
                "Entries page received"
            ),
            Err(err) => warn!(operation = "list", error = %err, "Entries request failed"),
        }
        result
    }

    async fn create(&self, input: &EntryInput) -> Result<Entry, ApiError> {
        input.validate().map_err(ApiError::local_validation)?;
        debug!(title = %input.title, "Creating entry");

        let result = async {
            let response = self.http.post(self.collection_url()).json(input).send().await?;
            let response = check_status(response, None).await?;
            decode::<Entry>(response).await
        }
        .await;

        if let Err(err) = &result {
            warn!(operation = "create", error = %err, "Entries request failed");
        }
        result
    }

    async fn update(&self, id: EntryId, input: &EntryInput) -> Result<Entry, ApiError> {
        input.validate().map_err(ApiError::local_validation)?;
        debug!(%id, title = %input.title, "Updating entry");

        let result = async {
            let response = self.http.put(self.entry_url(id)).json(input).send().await?;
            let response = check_status(response, Some(id)).await?;
            decode::<Entry>(response).await
        }
        .await;

        if let Err(err) = &result {
            warn!(operation = "update", %id, error = %err, "Entries request failed");
        }
        result
    }

    async fn delete(&self, id: EntryId) -> Result<(), ApiError> {
        debug!(%id, "Deleting entry");

        let result = async {
            let response = self.http.delete(self.entry_url(id)).send().await?;
            check_status(response, Some(id)).await?;
            Ok::<(), ApiError>(())
        }
        .await;

        if let Err(err) = &result {
            warn!(operation = "delete", %id, error = %err, "Entries request failed");
        }
        result
    }
}

/// Maps non-2xx responses to the error taxonomy.
///
/// `target` is the id the request addressed; a 404 on such a request is
/// [`ApiError::NotFound`].
async fn check_status(response: Response, target: Option<EntryId>) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = target {
            return Err(ApiError::NotFound { id });
        }
    }

    if matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY
    ) {
        if let Some((message, fields)) = parse_validation_body(&body) {
            return Err(ApiError::Validation { message, fields });
        }
    }

    Err(ApiError::Server {
        status: status.as_u16(),
        message: body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
