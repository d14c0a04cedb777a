//! HTTP client tests against the mock backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{entry_json, unreachable_base_url};
use favreel::api::{ApiClient, ApiError, EntriesApi, ErrorKind};
use favreel::catalog::{EntryId, EntryInput, EntryType};
use std::time::Duration;

fn client_for(mock: &MockBackend) -> ApiClient {
    ApiClient::with_timeout(&mock.base_url(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn first_page_sends_limit_without_cursor() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&format!(
        r#"{{"items": [{}, {}], "nextCursor": 2}}"#,
        entry_json(1, "Inception"),
        entry_json(2, "Heat")
    )))
    .await;

    let page = client_for(&mock).list_page(None, 20).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].title, "Inception");
    assert_eq!(page.next_cursor, Some(2));

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/entries");
    assert_eq!(
        requests[0].query_pairs(),
        vec![("limit".to_string(), "20".to_string())]
    );
}

#[tokio::test]
async fn later_pages_send_cursor() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"items": [], "nextCursor": null}"#))
        .await;

    let page = client_for(&mock).list_page(Some(40), 10).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.next_cursor, None);

    let pairs = mock.captured_requests().await[0].query_pairs();
    assert!(pairs.contains(&("limit".to_string(), "10".to_string())));
    assert!(pairs.contains(&("cursor".to_string(), "40".to_string())));
}

#[tokio::test]
async fn missing_next_cursor_means_last_page() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&format!(
        r#"{{"items": [{}]}}"#,
        entry_json(9, "Alien")
    )))
    .await;

    let page = client_for(&mock).list_page(None, 5).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_cursor, None);
}

#[tokio::test]
async fn create_posts_every_field_with_explicit_nulls() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json_with_status(201, &entry_json(12, "Dark")))
        .await;

    let mut input = EntryInput::new("Dark", EntryType::TvShow);
    input.year_time = Some("2017-2020".to_string());

    let entry = client_for(&mock).create(&input).await.unwrap();
    assert_eq!(entry.id, EntryId(12));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/entries");
    assert_eq!(requests[0].header("content-type"), Some("application/json"));

    let body = requests[0].json();
    assert_eq!(body["title"], "Dark");
    assert_eq!(body["type"], "TV_SHOW");
    assert_eq!(body["yearTime"], "2017-2020");
    for key in ["director", "budget", "location", "duration", "posterUrl", "notes"] {
        assert!(body.get(key).is_some(), "missing key {}", key);
        assert!(body[key].is_null(), "{} should be null", key);
    }
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_puts_to_entry_path() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&entry_json(7, "Heat (1995)")))
        .await;

    let input = EntryInput::new("Heat (1995)", EntryType::Movie);
    let entry = client_for(&mock).update(EntryId(7), &input).await.unwrap();
    assert_eq!(entry.title, "Heat (1995)");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/entries/7");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::no_content()).await;

    client_for(&mock).delete(EntryId(3)).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/entries/3");
}

#[tokio::test]
async fn delete_missing_entry_is_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "Entry not found"))
        .await;

    let err = client_for(&mock).delete(EntryId(99)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, ApiError::NotFound { id } if id == EntryId(99)));
}

#[tokio::test]
async fn update_missing_entry_is_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "Entry not found"))
        .await;

    let input = EntryInput::new("Gone", EntryType::Movie);
    let err = client_for(&mock).update(EntryId(5), &input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn not_found_on_collection_is_server_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text(404, "no such route"))
        .await;

    let err = client_for(&mock).list_page(None, 20).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 404, .. }));
}

#[tokio::test]
async fn structured_422_is_validation_with_fields() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json_with_status(
        422,
        r#"{"message": "Invalid entry", "errors": [{"field": "budget", "message": "Must be positive"}]}"#,
    ))
    .await;

    let mut input = EntryInput::new("Tenet", EntryType::Movie);
    input.budget = Some(1.0);
    let err = client_for(&mock).create(&input).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    let ApiError::Validation { message, fields } = err else {
        panic!("expected validation error");
    };
    assert_eq!(message, "Invalid entry");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field, "budget");
}

#[tokio::test]
async fn unstructured_400_is_server_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text(400, "Bad Request")).await;

    let input = EntryInput::new("Tenet", EntryType::Movie);
    let err = client_for(&mock).create(&input).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 400, .. }));
}

#[tokio::test]
async fn server_error_keeps_status() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let err = client_for(&mock).list_page(None, 20).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
    assert_eq!(err.user_message(), "Backend error (500)");
}

#[tokio::test]
async fn undecodable_success_body_is_invalid_response() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"entries": "nope"}"#))
        .await;

    let err = client_for(&mock).list_page(None, 20).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
    assert_eq!(err.kind(), ErrorKind::Server);
}

#[tokio::test]
async fn blank_title_is_rejected_without_a_request() {
    let mock = MockBackend::start().await;

    let input = EntryInput::new("   ", EntryType::Movie);
    let err = client_for(&mock).create(&input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client = ApiClient::with_timeout(&unreachable_base_url(), Duration::from_secs(1)).unwrap();

    let err = client.list_page(None, 20).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.user_message(), "Backend unreachable");
}
