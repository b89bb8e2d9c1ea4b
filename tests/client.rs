//! Integration tests for `WikiClient` against a local mock server.
//!
//! The final test talks to the real Wikipedia API and is `#[ignore]`d by
//! default. Run it with: `cargo test --test client -- --ignored`

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wikisearch::{
    render, ResultItem, SearchBackend, SearchController, SearchError, SearchState, WikiClient,
    NO_DESCRIPTION_PLACEHOLDER, RESULT_LIMIT,
};

fn mock_client(server: &MockServer) -> WikiClient {
    WikiClient::new().with_base_url(server.uri())
}

#[tokio::test]
async fn search_sends_query_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .and(query_param("q", "Einstein"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pages": [
                {"id": 736, "key": "Albert_Einstein", "title": "Albert Einstein",
                 "description": "German-born physicist"},
                {"id": 9999, "title": "Einstein (unit)", "description": null}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let items = client.search("Einstein", RESULT_LIMIT).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0],
        ResultItem::new(736, "Albert Einstein", Some("German-born physicist".into()))
    );
    assert!(items[1].description.is_none());
}

#[tokio::test]
async fn search_urlencodes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .and(query_param("q", "rust programming language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"pages": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let items = client
        .search("rust programming language", RESULT_LIMIT)
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn missing_pages_field_means_zero_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let items = client.search("anything", RESULT_LIMIT).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.search("Einstein", RESULT_LIMIT).await.unwrap_err();
    assert!(matches!(err, SearchError::Status(status) if status.as_u16() == 503));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.search("Einstein", RESULT_LIMIT).await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn controller_collapses_server_failure_to_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut controller = SearchController::new(mock_client(&server));
    controller.update_query("Einstein");
    controller.submit().await;

    assert_eq!(*controller.state(), SearchState::Empty);
    let out = render(controller.query(), controller.state(), "en");
    assert!(out.contains("No results found."));
}

#[tokio::test]
async fn controller_renders_cards_with_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pages": [
                {"id": 736, "title": "Albert Einstein", "description": "German-born physicist"},
                {"id": 9999, "title": "Einstein (unit)", "description": null}
            ]
        })))
        .mount(&server)
        .await;

    let mut controller = SearchController::new(mock_client(&server));
    controller.update_query("Einstein");
    controller.submit().await;

    let out = render(controller.query(), controller.state(), "en");
    assert!(out.contains("Albert Einstein"));
    assert!(out.contains("https://en.wikipedia.org/?curid=736"));
    assert!(out.contains("German-born physicist"));
    assert!(out.contains(NO_DESCRIPTION_PLACEHOLDER));
}

#[tokio::test]
#[ignore]
async fn live_wikipedia_search() {
    let client = WikiClient::new();
    let items = client
        .search("rust programming language", RESULT_LIMIT)
        .await
        .unwrap();
    assert!(!items.is_empty(), "Wikipedia should return results");
    assert!(items.len() <= RESULT_LIMIT);
    for item in &items {
        println!("{} - {}", item.title, item.article_url("en"));
    }
}
