use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use shared::clients::config::CompletionConfig;
use shared::services::user_service::MIN_HASH_COST;

const REGISTER_PATH: &str = "/api/register";
const LOGIN_PATH: &str = "/api/login";

fn test_server() -> TestServer {
    // Account routes never reach the completion service.
    let mut config = CompletionConfig::new("sk-test");
    config.base_url = "http://127.0.0.1:1".to_string();

    let state = api::build_state(config, MIN_HASH_COST).expect("Failed to build state");
    TestServer::new(api::create_app(state)).expect("Failed to start test server")
}

async fn register(server: &TestServer, username: &str, email: &str, password: &str) {
    let response = server
        .post(REGISTER_PATH)
        .json(&json!({"username": username, "email": email, "password": password}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_then_login() {
    let server = test_server();

    let response = server
        .post(REGISTER_PATH)
        .json(&json!({"username": "alice", "email": "alice@example.com", "password": "s3cret"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"success": true}));

    let response = server
        .post(LOGIN_PATH)
        .json(&json!({"username": "alice", "password": "s3cret"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"success": true}));
}

#[tokio::test]
async fn test_duplicate_username_or_email_rejected() {
    let server = test_server();
    register(&server, "alice", "alice@example.com", "s3cret").await;

    let duplicates = [
        json!({"username": "alice", "email": "other@example.com", "password": "pw"}),
        json!({"username": "bob", "email": "alice@example.com", "password": "pw"}),
    ];
    for body in duplicates {
        let response = server
            .post(REGISTER_PATH)
            .json(&body)
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "message": "Username or email already exists"})
        );
    }

    // The rejected "bob" registration left nothing behind.
    let response = server
        .post(LOGIN_PATH)
        .json(&json!({"username": "bob", "password": "pw"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bad_credentials_are_unauthorized() {
    let server = test_server();
    register(&server, "alice", "alice@example.com", "s3cret").await;

    let attempts = [
        json!({"username": "alice", "password": "wrong"}),
        json!({"username": "nobody", "password": "s3cret"}),
        json!({"username": "alice", "password": ""}),
    ];
    for body in attempts {
        let response = server.post(LOGIN_PATH).json(&body).expect_failure().await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "body: {}", body);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "message": "Invalid credentials"})
        );
    }
}

#[tokio::test]
async fn test_malformed_account_requests_rejected() {
    let server = test_server();

    let response = server
        .post(REGISTER_PATH)
        .json(&json!({"username": "alice", "password": "s3cret"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| m.contains("email")));

    let response = server
        .post(REGISTER_PATH)
        .json(&json!({"username": "", "email": "e@example.com", "password": "pw"}))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], false);

    let response = server
        .post(LOGIN_PATH)
        .text("username=alice")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], false);
}
