//! Tests for pagination module

use super::*;
use crate::auth::AuthConfig;
use crate::http::{HttpClient, HttpClientConfig};
use crate::models::PageResponse;
use crate::query::QueryFilters;
use crate::types::{Collection, JsonValue};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn filters(pairs: &[(&str, &str)]) -> QueryFilters {
    pairs.iter().copied().collect()
}

fn client() -> HttpClient {
    HttpClient::with_auth(HttpClientConfig::default(), AuthConfig::None).unwrap()
}

fn book(id: u64) -> serde_json::Value {
    json!({"id": id, "title": format!("Book {id}"), "tags": []})
}

// ============================================================================
// URL Construction Tests
// ============================================================================

#[test]
fn test_request_url_on_root_endpoint() {
    let paginator = NextLinkPaginator::new(1000, filters(&[("title", "Foo Bar"), ("num_highlights__gt", "5")]));
    let url = paginator
        .request_url("https://readwise.io/api/v2/books/")
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://readwise.io/api/v2/books/?page_size=1000&title=Foo+Bar&num_highlights__gt=5"
    );
}

#[test]
fn test_request_url_overwrites_server_params() {
    let paginator = NextLinkPaginator::new(50, filters(&[("book_id", "7")]));
    let url = paginator
        .request_url("https://readwise.io/api/v2/highlights/?book_id=1&page=2&page_size=1000")
        .unwrap();

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("book_id".to_string(), "7".to_string()),
            ("page".to_string(), "2".to_string()),
            ("page_size".to_string(), "50".to_string()),
        ]
    );
}

#[test]
fn test_request_url_rejects_relative_link() {
    let paginator = NextLinkPaginator::new(10, QueryFilters::new());
    assert!(paginator.request_url("/api/v2/books/?page=2").is_err());
}

#[test]
fn test_set_query_params_drops_duplicates() {
    let mut url = Url::parse("https://example.com/?a=1&b=2&a=3").unwrap();
    set_query_params(&mut url, [("a", "9"), ("c", "4")]);
    assert_eq!(url.as_str(), "https://example.com/?a=9&b=2&c=4");
}

#[test]
fn test_set_query_params_empty() {
    let mut url = Url::parse("https://example.com/path").unwrap();
    set_query_params(&mut url, std::iter::empty());
    assert_eq!(url.as_str(), "https://example.com/path");
}

// ============================================================================
// State Tests
// ============================================================================

#[test]
fn test_pagination_state_transitions() {
    let mut state = PaginationState::new("https://example.com/a");
    assert_eq!(state.next_request(10), Some("https://example.com/a"));

    state.record_page(4, Some("https://example.com/b".to_string()));
    assert_eq!(state.fetched, 4);
    assert_eq!(state.pages, 1);
    assert_eq!(state.next_request(10), Some("https://example.com/b"));
    assert_eq!(state.next_request(4), None);

    state.record_page(3, None);
    assert!(state.next_url.is_none());
    assert_eq!(state.next_request(100), None);
}

#[test]
fn test_empty_next_link_ends_pagination() {
    let mut state = PaginationState::new("https://example.com/a");
    state.record_page(1, Some(String::new()));
    assert!(state.next_url.is_none());
}

#[test]
fn test_non_positive_limit_never_requests() {
    let state = PaginationState::new("https://example.com/a");
    assert_eq!(state.next_request(0), None);
    assert_eq!(state.next_request(-5), None);
}

#[test]
fn test_process_page_preserves_order() {
    let paginator = NextLinkPaginator::new(2, QueryFilters::new());
    let mut state = PaginationState::new("https://example.com/");
    let mut records = vec![1, 2];

    let next = paginator.process_page(
        PageResponse {
            count: 5,
            next: Some("https://example.com/?page=3".to_string()),
            previous: None,
            results: vec![3, 4],
        },
        &mut records,
        &mut state,
    );

    assert_eq!(records, vec![1, 2, 3, 4]);
    assert_eq!(next, NextPage::with_url("https://example.com/?page=3"));

    let next = paginator.process_page(
        PageResponse {
            count: 5,
            next: None,
            previous: None,
            results: vec![5],
        },
        &mut records,
        &mut state,
    );
    assert_eq!(next, NextPage::Done);
    assert_eq!(records, vec![1, 2, 3, 4, 5]);
}

// ============================================================================
// Fetch Loop Tests
// ============================================================================

#[tokio::test]
async fn test_single_page_issues_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/books/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": null, "previous": null,
            "results": [book(1), book(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let start = Url::parse(&format!("{}/api/v2/books/", mock_server.uri())).unwrap();
    let outcome = NextLinkPaginator::new(1000, QueryFilters::new())
        .fetch_all(&client, Collection::Books, &start, 10000)
        .await;

    assert!(!outcome.is_partial());
    assert_eq!(outcome.pages, 1);
    assert_eq!(outcome.records.len(), 2);
}

#[tokio::test]
async fn test_stops_at_limit_without_truncating() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/api/v2/books/?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v2/books/"))
        .and(query_param("page_size", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 9, "next": next, "previous": null,
            "results": [book(1), book(2), book(3)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let start = Url::parse(&format!("{}/api/v2/books/", mock_server.uri())).unwrap();
    let outcome = NextLinkPaginator::new(3, QueryFilters::new())
        .fetch_all(&client, Collection::Books, &start, 2)
        .await;

    // The whole first page is kept even though it overshoots the limit
    assert_eq!(outcome.records.len(), 3);
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn test_failure_keeps_earlier_pages() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/api/v2/highlights/?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v2/highlights/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/highlights/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3, "next": next, "previous": null,
            "results": [
                {"id": 1, "text": "a", "book_id": 10},
                {"id": 2, "text": "b", "book_id": 10}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let start = Url::parse(&format!("{}/api/v2/highlights/", mock_server.uri())).unwrap();
    let outcome = NextLinkPaginator::new(1000, QueryFilters::new())
        .fetch_all(&client, Collection::Highlights, &start, 10000)
        .await;

    assert!(outcome.is_partial());
    assert_eq!(outcome.pages, 1);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(
        outcome.error.unwrap().to_string(),
        "API request failed: 500 upstream down"
    );
}

#[tokio::test]
async fn test_zero_limit_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client();
    let start = Url::parse(&format!("{}/api/v2/books/", mock_server.uri())).unwrap();
    let outcome = NextLinkPaginator::new(0, QueryFilters::new())
        .fetch_all(&client, Collection::Books, &start, 0)
        .await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.pages, 0);
}

#[tokio::test]
async fn test_records_are_kept_verbatim() {
    let mock_server = MockServer::start().await;

    let page = json!([
        {"id": 1, "text": "a", "location": null, "is_favorite": true},
        {"id": 2, "text": "b", "location": 5, "is_favorite": true, "book_id": 10}
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v2/highlights/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": null, "previous": null, "results": page
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let start = Url::parse(&format!("{}/api/v2/highlights/", mock_server.uri())).unwrap();
    let outcome = NextLinkPaginator::new(1000, QueryFilters::new())
        .fetch_all(&client, Collection::Highlights, &start, 10000)
        .await;

    assert!(!outcome.is_partial());
    assert_eq!(JsonValue::Array(outcome.records), page);
}
