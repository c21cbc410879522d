//! Integration tests for the HTTP client using wiremock mock server

use ei_client::{Client, ClientError};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn test_verify_user_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/verify"))
        .and(body_json(json!({ "email": "alice@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "name": "Alice",
            "email": "alice@example.com",
            "image": "",
            "tier": "Premium"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let patch = client.verify_user("alice@example.com").await.unwrap();

    assert_eq!(patch.id.as_deref(), Some("user-1"));
    assert_eq!(patch.tier.as_deref(), Some("Premium"));
    assert_eq!(patch.wallet_address, None);
}

#[tokio::test]
async fn test_verify_user_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/verify"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "User not found: nobody@example.com"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.verify_user("nobody@example.com").await.unwrap_err();

    match err {
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "NOT_FOUND");
            assert_eq!(message, "User not found: nobody@example.com");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_string_error_body_is_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/new/graphsv3"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Error fetching status changes" })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.get_status_changes().await.unwrap_err();

    assert_eq!(err.user_message(), "Error fetching status changes");
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stripe/cancel-subscription"))
        .respond_with(ResponseTemplate::new(405).set_body_string("Method POST not allowed"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.cancel_subscription().await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 405, .. }));
    assert_eq!(err.user_message(), "Method POST not allowed");
}

#[tokio::test]
async fn test_user_id_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/GetUserStatus"))
        .and(header("X-User-Id", "user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tier": "Free" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("user-1"));
    let status = client.get_user_status().await.unwrap();

    assert_eq!(status.tier.as_deref(), Some("Free"));
}

#[tokio::test]
async fn test_bearer_token_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/GetUserStatus"))
        .and(header("Authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        Client::new(&mock_server.uri(), None).with_token(Some("session-token".to_string()));
    let status = client.get_user_status().await.unwrap();

    assert_eq!(status.tier, None);
}

#[tokio::test]
async fn test_update_name_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/update"))
        .and(body_json(json!({ "userId": "user-1", "name": "Bob" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "name": "Bob",
            "email": "alice@example.com"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let patch = client.update_name("user-1", "Bob").await.unwrap();

    assert_eq!(patch.name.as_deref(), Some("Bob"));
}

#[tokio::test]
async fn test_cancel_subscription_reads_end_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/stripe/cancel-subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "endDate": 1700000000 })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let response = client.cancel_subscription().await.unwrap();

    assert_eq!(response.end_date, 1_700_000_000);
}

#[tokio::test]
async fn test_status_changes_empty_aggregation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/new/graphsv3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "eip": [], "erc": [], "rip": [] })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let aggregation = client.get_status_changes().await.unwrap();

    assert_eq!(aggregation.total(), 0);
}

#[tokio::test]
async fn test_invalid_json_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/DownloadCounter"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.increment_download_counter().await.unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}

#[tokio::test]
async fn test_update_password_no_content_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/update"))
        .and(body_json(json!({ "password": "hunter22" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);

    assert!(client.update_password("hunter22").await.is_ok());
}

#[tokio::test]
async fn test_update_password_error_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/update"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": "UNAUTHORIZED", "message": "Missing X-User-Id header" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.update_password("hunter22").await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 401, .. }));
}
