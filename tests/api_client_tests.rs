//! Integration tests for the identity/GraphQL client using a wiremock server

use serde_json::json;
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};
use xp_board::{
    application::{
        error::ApplicationError,
        services::{AuthService, ProfileService},
    },
    domain::models::session::SessionToken,
    services::KoodApiClient,
};

const SIGN_IN: &str = "/api/auth/signin";
const GRAPHQL: &str = "/api/graphql-engine/v1/graphql";

fn client_for(server: &MockServer) -> KoodApiClient {
    KoodApiClient::new(&server.uri(), None).unwrap()
}

#[tokio::test]
async fn test_sign_in_sends_basic_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGN_IN))
        .and(header(
            "authorization",
            "Basic amFuZUBleGFtcGxlLmNvbTpzZWNyZXQ=",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("header.payload.sig")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = client_for(&mock_server)
        .sign_in("jane@example.com", "secret")
        .await
        .unwrap();

    assert_eq!(token, SessionToken::new("header.payload.sig"));
}

#[tokio::test]
async fn test_sign_in_error_body_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGN_IN))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "User does not exist or password incorrect"})),
        )
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).sign_in("jane@example.com", "wrong").await;

    match result {
        Err(ApplicationError::AuthFailed(msg)) => assert!(msg.contains("password incorrect")),
        other => panic!("expected AuthFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_in_server_error_is_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGN_IN))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).sign_in("jane@example.com", "secret").await;

    assert!(matches!(result, Err(ApplicationError::Upstream(_))));
}

#[tokio::test]
async fn test_fetch_profile_uses_bearer_token_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .and(header("authorization", "Bearer jwt-123"))
        .and(body_string_contains("transactions(order_by"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "user": [{
                    "id": 11,
                    "login": "jdoe",
                    "attrs": {"firstName": "Jane", "lastName": "Doe", "email": "jane@example.com"},
                    "totalUp": 2000,
                    "totalDown": 1000,
                    "transactions": [
                        {
                            "id": 1,
                            "type": "xp",
                            "amount": 5000,
                            "path": "/johvi/div-01/go-reloaded",
                            "createdAt": "2024-02-01T09:30:00.123456+00:00"
                        }
                    ]
                }]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let profile = client_for(&mock_server)
        .fetch_profile(&SessionToken::new("jwt-123"))
        .await
        .unwrap();

    assert_eq!(profile.login, "jdoe");
    assert_eq!(profile.total_up, 2000);
    assert_eq!(profile.transactions.len(), 1);
    assert_eq!(profile.transactions[0].task_name(), Some("go-reloaded"));
}

#[tokio::test]
async fn test_fetch_profile_graphql_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Could not verify JWT: JWTExpired"}]
        })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .fetch_profile(&SessionToken::new("stale"))
        .await;

    match result {
        Err(ApplicationError::Upstream(msg)) => assert!(msg.contains("JWTExpired")),
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_profile_empty_user_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": []}})))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .fetch_profile(&SessionToken::new("jwt"))
        .await;

    assert!(matches!(result, Err(ApplicationError::DataShape(_))));
}

#[tokio::test]
async fn test_fetch_profile_rejected_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .fetch_profile(&SessionToken::new("jwt"))
        .await;

    assert!(matches!(result, Err(ApplicationError::Unauthorized)));
}

#[tokio::test]
async fn test_fetch_profile_unreachable_host() {
    // nothing listens on the discard port
    let client = KoodApiClient::new("http://127.0.0.1:9", None).unwrap();

    let result = client.fetch_profile(&SessionToken::new("jwt")).await;

    assert!(matches!(result, Err(ApplicationError::Upstream(_))));
}
