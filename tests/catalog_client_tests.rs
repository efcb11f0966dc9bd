use std::time::Duration;

use serde_json::json;
use shelf::api::{CatalogClient, CatalogSource, FetchError};
use shelf::core::action::{Action, Effect, update};
use shelf::core::state::{CatalogState, LoadStatus};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn wire_book(id: &str, book_type: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": format!("Title {id}"),
        "author": { "name": format!("Author {id}") },
        "description": format!("About {id}"),
        "bookType": book_type,
    })
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

fn ids(books: &[shelf::api::Book]) -> Vec<&str> {
    books.iter().map(|b| b.id.as_str()).collect()
}

async fn mount_page(server: &MockServer, page: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Fetch and partition
// ============================================================================

#[tokio::test]
async fn test_load_catalog_partitions_by_book_type() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "1",
        json!({
            "data": [
                wire_book("1", "PDF"),
                wire_book("2", "UNICODE"),
                wire_book("3", "PDF"),
                wire_book("4", "OTHER"),
            ]
        }),
    )
    .await;

    let catalog = client_for(&mock_server).load_catalog(1).await.unwrap();

    assert_eq!(ids(&catalog.pdf_books), vec!["1", "3"]);
    assert_eq!(ids(&catalog.unicode_books), vec!["2"]);
    assert_eq!(catalog.pdf_books[0].author.name, "Author 1");
}

#[tokio::test]
async fn test_untagged_records_are_dropped_not_fatal() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "1",
        json!({
            "data": [
                wire_book("1", "PDF"),
                {
                    "_id": "2",
                    "title": "Null tag",
                    "author": { "name": "Anon" },
                    "description": "",
                    "bookType": null
                },
                {
                    "_id": "3",
                    "title": "No tag",
                    "author": { "name": "Anon" },
                    "description": ""
                },
                wire_book("4", "UNICODE"),
            ]
        }),
    )
    .await;

    let catalog = client_for(&mock_server).load_catalog(1).await.unwrap();

    assert_eq!(ids(&catalog.pdf_books), vec!["1"]);
    assert_eq!(ids(&catalog.unicode_books), vec!["4"]);
}

#[tokio::test]
async fn test_empty_data_is_not_an_error() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", json!({ "data": [] })).await;

    let catalog = client_for(&mock_server).load_catalog(1).await.unwrap();

    assert!(catalog.pdf_books.is_empty());
    assert!(catalog.unicode_books.is_empty());
}

#[tokio::test]
async fn test_requests_the_given_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "3", json!({ "data": [wire_book("30", "UNICODE")] })).await;

    let catalog = client_for(&mock_server).load_catalog(3).await.unwrap();

    assert_eq!(ids(&catalog.unicode_books), vec!["30"]);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", json!({ "data": [wire_book("1", "PDF")] })).await;

    let client = CatalogClient::new(format!("{}/", mock_server.uri()), Duration::from_secs(5)).unwrap();
    let catalog = client.load_catalog(1).await.unwrap();

    assert_eq!(ids(&catalog.pdf_books), vec!["1"]);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).load_catalog(1).await;

    match result {
        Err(FetchError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).load_catalog(1).await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_missing_data_field_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", json!({ "books": [] })).await;

    let result = client_for(&mock_server).load_catalog(1).await;

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri(), Duration::from_millis(100)).unwrap();
    let result = client.load_catalog(1).await;

    assert!(matches!(result, Err(FetchError::Timeout)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 1
    let client = CatalogClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let result = client.load_catalog(1).await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}

// ============================================================================
// Client + reducer
// ============================================================================

#[tokio::test]
async fn test_failed_fetch_leaves_state_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut state = CatalogState::new(1);
    let Effect::SpawnFetch { page, generation } = update(&mut state, Action::Load) else {
        panic!("Load must spawn a fetch");
    };

    let error = client.load_catalog(page).await.unwrap_err();
    update(
        &mut state,
        Action::LoadFailed {
            generation,
            error: error.to_string(),
        },
    );

    assert!(matches!(state.status, LoadStatus::Failed(_)));
    assert!(state.pdf_books.is_empty());
    assert!(state.unicode_books.is_empty());
}

#[tokio::test]
async fn test_second_load_replaces_first() {
    let first = MockServer::start().await;
    mount_page(
        &first,
        "1",
        json!({ "data": [wire_book("a", "PDF"), wire_book("b", "UNICODE")] }),
    )
    .await;
    let second = MockServer::start().await;
    mount_page(&second, "1", json!({ "data": [wire_book("c", "PDF")] })).await;

    let mut state = CatalogState::new(1);
    for server in [&first, &second] {
        let Effect::SpawnFetch { page, generation } = update(&mut state, Action::Load) else {
            panic!("Load must spawn a fetch");
        };
        let catalog = client_for(server).load_catalog(page).await.unwrap();
        update(&mut state, Action::CatalogLoaded { generation, catalog });
    }

    assert_eq!(ids(&state.pdf_books), vec!["c"]);
    assert!(state.unicode_books.is_empty());
    assert_eq!(state.status, LoadStatus::Loaded);
}
