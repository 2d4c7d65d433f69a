//! Tests for the paginated point-list API client.

use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::ApiSource;
use crate::error::SyncError;
use crate::models::CardEntry;
use crate::source::CardSource;

/// Builds a successful page envelope with the given (name, points) records.
fn page_json(total_pages: u32, cards: &[(&str, u32)]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = cards
        .iter()
        .map(|(name, points)| {
            serde_json::json!({
                "DisplayCardName": name,
                "Name": name,
                "Points": points,
            })
        })
        .collect();

    serde_json::json!({
        "Success": "Success",
        "Result": { "TotalPages": total_pages, "Results": results }
    })
}

async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(body_string_contains(format!("currentPage={page}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn fetch_blocking(endpoint: String) -> crate::error::SyncResult<Vec<CardEntry>> {
    ApiSource::new(endpoint).fetch()
}

#[tokio::test]
async fn single_page_fetch() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_json(1, &[("Dark Magician", 10)])).await;

    let endpoint = server.uri();
    let cards = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cards, vec![CardEntry::new("Dark Magician", "10")]);
}

#[tokio::test]
async fn aggregates_all_pages_in_order() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_json(3, &[("A", 1), ("B", 2)])).await;
    mount_page(&server, 2, page_json(3, &[("C", 3), ("D", 4)])).await;
    mount_page(&server, 3, page_json(3, &[("E", 5), ("F", 6)])).await;

    let endpoint = server.uri();
    let cards = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cards.len(), 6);
    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D", "E", "F"]);
}

#[tokio::test]
async fn display_name_falls_back_to_name() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Success": "Success",
        "Result": {
            "TotalPages": 1,
            "Results": [
                { "DisplayCardName": null, "Name": "Dark Magician", "Points": 10 },
                { "DisplayCardName": "  ", "Name": "Pot of Greed", "Points": 100 },
                { "DisplayCardName": "Monster Reborn ", "Name": "ignored", "Points": 7 },
            ]
        }
    });
    mount_page(&server, 1, body).await;

    let endpoint = server.uri();
    let cards = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap()
        .unwrap();

    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Dark Magician", "Pot of Greed", "Monster Reborn"]);
}

#[tokio::test]
async fn drops_records_without_name_or_points() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Success": "Success",
        "Result": {
            "TotalPages": 1,
            "Results": [
                { "DisplayCardName": "", "Name": "", "Points": 5 },
                { "DisplayCardName": "No Points Card", "Name": null },
                { "DisplayCardName": "Dark Magician", "Name": null, "Points": 10 },
            ]
        }
    });
    mount_page(&server, 1, body).await;

    let endpoint = server.uri();
    let cards = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cards, vec![CardEntry::new("Dark Magician", "10")]);
}

#[tokio::test]
async fn missing_success_indicator_is_an_api_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "Result": { "TotalPages": 1, "Results": [] }
    });
    mount_page(&server, 1, body).await;

    let endpoint = server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap();

    match result {
        Err(SyncError::Api { page, .. }) => assert_eq!(page, 1),
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn missing_result_payload_is_an_api_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "Success": "Success" });
    mount_page(&server, 1, body).await;

    let endpoint = server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap();

    match result {
        Err(SyncError::Api { page, .. }) => assert_eq!(page, 1),
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn page_failure_aborts_the_whole_fetch() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_json(3, &[("A", 1)])).await;
    Mock::given(method("POST"))
        .and(body_string_contains("currentPage=2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap();

    match result {
        Err(SyncError::HttpStatus { status, .. }) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("Expected HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let result = tokio::task::spawn_blocking(move || fetch_blocking(endpoint))
        .await
        .unwrap();

    match result {
        Err(SyncError::Json(_)) => {}
        other => panic!("Expected Json error, got: {other:?}"),
    }
}
