/// End-to-end tests driving the router in-process with `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use launchpad::{build_router, AppState, AuthConfig, Config};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    app_with(Config::default(), AuthConfig::default())
}

fn app_with(config: Config, auth: AuthConfig) -> Router {
    build_router(AppState::new(config, auth))
}

async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_json(app: Router, path: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[rstest]
#[case("/", "Build Your Next Project")]
#[case("/sign-in", "Sign In")]
#[case("/sign-up", "Sign Up")]
#[case("/dashboard", "Welcome back!")]
#[case("/settings", "Manage your account")]
#[tokio::test]
async fn test_pages_render(#[case] path: &str, #[case] expected: &str) {
    let (status, body) = get(app(), path).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(expected), "{} should contain {:?}", path, expected);
}

#[tokio::test]
async fn test_dashboard_highlights_only_exact_path() {
    let (_, body) = get(app(), "/dashboard").await;
    assert_eq!(body.matches(r#"aria-current="page""#).count(), 1);
    assert!(body.contains(r#"href="/dashboard" class="flex items-center space-x-2 text-sm font-medium transition-colors hover:text-primary text-foreground" aria-current="page""#));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (status, body) = get(app(), "/dashboard/x").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Route &#39;/dashboard/x&#39; not found") || body.contains("Route '/dashboard/x' not found"));
}

#[tokio::test]
async fn test_missing_static_file_is_404() {
    let (status, _) = get(app(), "/static/does-not-exist.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case::page("/dashboard", StatusCode::OK)]
#[case::api_wrong_method("/api/users", StatusCode::METHOD_NOT_ALLOWED)]
#[case::framework_internal("/_next/x.js", StatusCode::NOT_FOUND)]
#[case::static_asset("/static/globals.css", StatusCode::OK)]
#[case::unknown_page("/unknown", StatusCode::NOT_FOUND)]
#[tokio::test]
async fn test_gate_forwards_with_auth_configured(#[case] path: &str, #[case] expected: StatusCode) {
    let mut config = Config::default();
    config.build.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../static").to_string();
    let auth = AuthConfig::new(Some("pk_test".into()), Some("sk_test".into()));

    let (status, _) = get(app_with(config, auth), path).await;
    assert_eq!(status, expected);
    assert!(!status.is_redirection(), "{} was redirected", path);
}

#[tokio::test]
async fn test_gate_forwards_api_post_with_auth_configured() {
    let auth = AuthConfig::new(Some("pk_test".into()), Some("sk_test".into()));
    let (status, body) = post_json(
        app_with(Config::default(), auth),
        "/api/posts",
        json!({ "title": "Hello", "published": true }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "Hello", "published": true }));
}

#[tokio::test]
async fn test_user_endpoint_accepts_valid_input() {
    let (status, body) = post_json(
        app(),
        "/api/users",
        json!({ "name": "Ada", "email": "ada@example.com", "extra": 1 }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "Ada", "email": "ada@example.com" }));
}

#[tokio::test]
async fn test_user_endpoint_reports_violations() {
    let (status, body) = post_json(
        app(),
        "/api/users",
        json!({ "name": "a".repeat(101), "email": "not-an-email" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "error": "validation_failed",
            "violations": [
                {
                    "field": "name",
                    "kind": "max_length_exceeded",
                    "message": "String must contain at most 100 character(s)"
                },
                {
                    "field": "email",
                    "kind": "format_invalid",
                    "message": "Invalid email address"
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_post_endpoint_defaults_published() {
    let (status, body) = post_json(app(), "/api/posts", json!({ "title": "Hello" }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "Hello", "published": false }));
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (status, body) = post_json(app(), "/api/posts", "{ not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = Config::default();
    config.server.body_limit = 32;

    let payload = json!({ "title": "t".repeat(64) }).to_string();
    let (status, body) = post_json(app_with(config, AuthConfig::default()), "/api/posts", payload).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");
}
