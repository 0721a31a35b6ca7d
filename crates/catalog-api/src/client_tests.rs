//! Unit and integration tests for the CatalogClient.

use super::*;
use crate::error::{ApiError, Error};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "Learn the fundamentals",
        "category": "Web Development",
        "price": 49.99,
        "available": true,
        "instructor": "Dr. Sarah Johnson",
        "duration": "8 weeks",
        "level": "Beginner",
        "tags": ["html", "css"],
        "enrollmentCount": 3452,
        "rating": 4.7
    })
}

// Test: CatalogClient should use the default base URL
#[test]
fn test_catalog_client_default_base_url() {
    let client = CatalogClient::builder().build().unwrap();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

// Test: trailing slashes are trimmed so endpoint paths join cleanly
#[test]
fn test_catalog_client_trims_trailing_slash() {
    let client = CatalogClient::new("http://example.com:5000/").unwrap();
    assert_eq!(client.base_url(), "http://example.com:5000");
}

// Test: builder applies a custom timeout
#[test]
fn test_catalog_client_builder_timeout() {
    let client = CatalogClient::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    assert_eq!(client.timeout(), Duration::from_secs(2));
}

#[tokio::test]
async fn test_list_items_without_criteria() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json("1", "Intro"), item_json("2", "Advanced")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let items = client.list_items(&ItemQuery::new()).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "1");
    assert_eq!(items[1].name, "Advanced");
}

#[tokio::test]
async fn test_list_items_sends_criteria_as_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(query_param("search", "react"))
        .and(query_param("level", "Advanced"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([item_json("2", "React")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let query = ItemQuery::new().search("react").level("Advanced").category("");
    let items = client.list_items(&query).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "2");
}

#[tokio::test]
async fn test_get_item_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json("1", "Intro")))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let item = client.get_item("1").await.unwrap();

    assert_eq!(item.id, "1");
    assert_eq!(item.tags, vec!["html", "css"]);
}

#[tokio::test]
async fn test_get_item_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/invalid-id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Item not found"
        })))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let err = client.get_item("invalid-id").await.unwrap_err();

    match err {
        Error::Api(ApiError::NotFound { resource, id }) => {
            assert_eq!(resource, "item");
            assert_eq!(id, "invalid-id");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

// Test: reserved URL characters in an id stay inside the id's path segment
#[tokio::test]
async fn test_get_item_escapes_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json("1", "Intro")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();

    for id in ["1?x", "1#frag", "1/extra"] {
        let err = client.get_item(id).await.unwrap_err();
        match err {
            Error::Api(ApiError::NotFound { id: missing, .. }) => assert_eq!(missing, id),
            other => panic!("Expected NotFound for {id:?}, got {:?}", other),
        }
    }

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec!["/api/items/1%3Fx", "/api/items/1%23frag", "/api/items/1%2Fextra"]
    );
}

#[test]
fn test_item_url_rejects_unusable_base() {
    let client = CatalogClient::new("not a url").unwrap();
    assert!(matches!(client.item_url("1"), Err(Error::Url(_))));
}

#[tokio::test]
async fn test_create_item_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/items"))
        .and(body_partial_json(json!({ "name": "New Item", "price": 15.99 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(item_json("13", "New Item")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let new_item = NewItem {
        name: Some("New Item".to_string()),
        price: Some(15.99),
        ..Default::default()
    };
    let item = client.create_item(&new_item).await.unwrap();

    assert_eq!(item.id, "13");
    assert_eq!(item.name, "New Item");
}

#[tokio::test]
async fn test_create_item_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Required fields are missing",
            "required": [
                "name", "price", "instructor", "category", "description", "level", "duration"
            ],
            "missing": ["name"]
        })))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let err = client.create_item(&NewItem::default()).await.unwrap_err();

    match err {
        Error::Api(ApiError::Validation {
            message,
            required,
            missing,
        }) => {
            assert!(message.contains("required") || message.contains("Required"));
            assert_eq!(required.len(), 7);
            assert_eq!(missing, vec!["name"]);
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Error retrieving items",
            "error": "boom"
        })))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let err = client.list_items(&ItemQuery::new()).await.unwrap_err();

    match err {
        Error::Api(ApiError::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error retrieving items");
        }
        other => panic!("Expected Http, got {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_used_as_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let err = client.health().await.unwrap_err();

    match err {
        Error::Api(ApiError::Http { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("Expected Http, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let err = client.list_items(&ItemQuery::new()).await.unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_health_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "message": "Server is running"
        })))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(mock_server.uri()).unwrap();
    let health = client.health().await.unwrap();

    assert!(health.is_ok());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 9 (discard) on localhost is not expected to accept HTTP connections.
    let client = CatalogClient::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.list_items(&ItemQuery::new()).await.unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Network { .. })));
    assert_eq!(err.exit_code(), 3);
}
