//! Router-level tests: the full middleware stack (token gate, policy
//! enforcement, HTTP layers) is exercised in-process via `oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use server_status_api::app::build_router;
use server_status_api::config::Config;
use server_status_api::state::AppState;

fn test_app(secret: &str, allowed_tokens: &str) -> Router {
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        app_version: "1.2.3".to_string(),
        api_secret_key: secret.to_string(),
        api_allowed_tokens: allowed_tokens.to_string(),
    };
    build_router(AppState::new(&config))
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn get_with_auth(path: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn status_without_credentials_is_unauthorized() {
    let app = test_app("sekret", "");

    let resp = app.oneshot(get("/status")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(resp).await;
    assert_eq!(body["status"], 401);
    assert_eq!(body["path"], "/status");
    assert!(body["timestamp"].is_string());
    assert!(body["errors"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn status_with_valid_secret_returns_snapshot() {
    let app = test_app("sekret", "");

    let resp = app
        .oneshot(get_with_auth("/status", "Bearer sekret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["version"], "1.2.3");
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].as_u64().is_some());
    assert!(body["availableProcessors"].as_u64().unwrap() > 0);

    let total = body["totalMemory"].as_u64().unwrap();
    let free = body["freeMemory"].as_u64().unwrap();
    let used = body["usedMemory"].as_u64().unwrap();
    assert_eq!(used, total - free);
}

#[tokio::test]
async fn status_accepts_allow_list_tokens() {
    let app = test_app("", "A, B,C");

    for token in ["A", "B", "C"] {
        let resp = test_app("", "A, B,C")
            .oneshot(get_with_auth("/status", &format!("Bearer {token}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "token {token} should pass");
    }

    let resp = app
        .oneshot(get_with_auth("/status", "Bearer D"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn uptime_requires_auth_and_reports_millis() {
    let app = test_app("sekret", "");

    let resp = test_app("sekret", "")
        .oneshot(get("/status/uptime"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(get_with_auth("/status/uptime", "Bearer sekret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert!(body["uptime"].as_u64().is_some());
}

#[tokio::test]
async fn auth_check_is_public_and_always_200() {
    // no header
    let resp = test_app("sekret", "")
        .oneshot(get("/auth/check"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "No authentication token provided");

    // valid token
    let resp = test_app("sekret", "")
        .oneshot(get_with_auth("/auth/check", "Bearer sekret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Authentication token is valid");

    // wrong token: still 200, but invalid
    let resp = test_app("sekret", "")
        .oneshot(get_with_auth("/auth/check", "Bearer nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn auth_validate_missing_header_is_bad_request() {
    let resp = test_app("sekret", "")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/validate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Authorization header is missing");
}

#[tokio::test]
async fn auth_validate_rejects_non_bearer_scheme() {
    let resp = test_app("sekret", "")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/validate")
                .header(header::AUTHORIZATION, "Basic xyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await;
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["message"],
        "Invalid Authorization header format. Use: Bearer <token>"
    );
}

#[tokio::test]
async fn auth_validate_accepts_valid_and_rejects_wrong_token() {
    let resp = test_app("sekret", "")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/validate")
                .header(header::AUTHORIZATION, "Bearer sekret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Token is valid");

    let resp = test_app("sekret", "")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/validate")
                .header(header::AUTHORIZATION, "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(resp).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Token is invalid or expired");
}

#[tokio::test]
async fn unknown_routes_are_denied() {
    let resp = test_app("sekret", "")
        .oneshot(get("/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // even with valid credentials
    let resp = test_app("sekret", "")
        .oneshot(get_with_auth("/does-not-exist", "Bearer sekret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn hello_and_version_are_protected() {
    let resp = test_app("sekret", "").oneshot(get("/hello")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test_app("sekret", "")
        .oneshot(get_with_auth("/version", "Bearer sekret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["version"], "1.2.3");
}

#[tokio::test]
async fn lowercase_bearer_prefix_is_not_accepted() {
    let resp = test_app("sekret", "")
        .oneshot(get_with_auth("/status", "bearer sekret"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
