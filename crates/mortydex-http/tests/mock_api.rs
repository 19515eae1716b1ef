//! Mock catalog tests for the HTTP character source.
//!
//! These tests use wiremock to simulate the REST catalog and check request
//! shapes and error mapping without network access.

use mortydex_core::error::Error;
use mortydex_core::{ApiUrl, CharacterFilter, CharacterSource, Status};
use mortydex_http::HttpSource;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a source pointed at a mock server.
fn mock_source(server: &MockServer) -> HttpSource {
    let api = ApiUrl::new(format!("http://127.0.0.1:{}/api", server.address().port())).unwrap();
    HttpSource::new(api)
}

fn rick() -> Value {
    json!({
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": "https://rickandmortyapi.com/api/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    })
}

fn morty() -> Value {
    let mut morty = rick();
    morty["id"] = json!(2);
    morty["name"] = json!("Morty Smith");
    morty
}

// ============================================================================
// Paged queries
// ============================================================================

#[tokio::test]
async fn test_first_page_without_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {
                "count": 826,
                "pages": 42,
                "next": "https://rickandmortyapi.com/api/character/?page=2",
                "prev": null
            },
            "results": [rick()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = mock_source(&server).query(None, None).await.unwrap();

    assert_eq!(page.info.count, 826);
    assert_eq!(page.info.pages, 42);
    assert_eq!(page.info.prev, None);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].status, Status::Alive);
}

#[tokio::test]
async fn test_filter_and_page_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/"))
        .and(query_param("name", "morty"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": { "count": 21, "pages": 2, "next": null, "prev": "https://rickandmortyapi.com/api/character/?page=1&name=morty" },
            "results": [morty()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = CharacterFilter {
        name: Some("morty".to_string()),
        status: Some(String::new()),
        ..CharacterFilter::default()
    };
    let page = mock_source(&server)
        .query(Some(&filter), Some(2))
        .await
        .unwrap();

    assert_eq!(page.results[0].name, "Morty Smith");
}

#[tokio::test]
async fn test_no_matches_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "There is nothing here" })),
        )
        .mount(&server)
        .await;

    let err = mock_source(&server)
        .query(Some(&CharacterFilter::by_name("zeta")), None)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("There is nothing here"));
}

#[tokio::test]
async fn test_server_error_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = mock_source(&server).query(None, None).await.unwrap_err();

    match err {
        Error::Protocol(e) => assert_eq!(e.status, 500),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = mock_source(&server).query(None, None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let source = HttpSource::new(ApiUrl::new(format!("http://127.0.0.1:{port}/api")).unwrap());

    let err = source.query(None, None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.is_not_found());
}

// ============================================================================
// Lookups by id
// ============================================================================

#[tokio::test]
async fn test_get_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rick()))
        .mount(&server)
        .await;

    let character = mock_source(&server).get(1).await.unwrap();
    assert_eq!(character.name, "Rick Sanchez");
    assert!(character.is_remote_sourced());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/9999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Character not found" })),
        )
        .mount(&server)
        .await;

    let err = mock_source(&server).get(9999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_many() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([rick(), morty()])))
        .mount(&server)
        .await;

    let characters = mock_source(&server).get_many(&[1, 2]).await.unwrap();
    let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Rick Sanchez", "Morty Smith"]);
}

#[tokio::test]
async fn test_get_many_single_id_returns_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rick()))
        .mount(&server)
        .await;

    let characters = mock_source(&server).get_many(&[1]).await.unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, 1);
}

#[tokio::test]
async fn test_get_many_empty_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let characters = mock_source(&server).get_many(&[]).await.unwrap();
    assert!(characters.is_empty());
}
