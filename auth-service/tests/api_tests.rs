mod common;

use auth_core::TokenCodec;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use chrono::Duration;
use common::expired_token;
use common::spawn_app;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

async fn post_credentials(app: &Router, path: &str, username: &str, password: &str) -> Response {
    let body = json!({ "username": username, "password": password });

    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_auth(app: &Router, authorization: Option<&str>) -> Response {
    let mut builder = Request::builder().uri("/auth");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not json")
}

async fn text_body(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn token_of(response: Response) -> String {
    let body = json_body(response).await;
    body["data"]["token"]
        .as_str()
        .expect("response carries no token")
        .to_string()
}

#[tokio::test]
async fn test_sign_up_returns_token_for_new_username() {
    let (app, codec) = spawn_app();

    let response = post_credentials(&app, "/auth/sign-up", "alice", "pw1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let token = token_of(response).await;
    assert!(codec.validate(&token));
    assert_eq!(codec.extract_subject(&token).unwrap(), "alice");
}

#[tokio::test]
async fn test_sign_up_rejects_taken_username() {
    let (app, _) = spawn_app();

    let first = post_credentials(&app, "/auth/sign-up", "alice", "pw1").await;
    assert_eq!(first.status(), StatusCode::OK);

    // same username, different password
    let second = post_credentials(&app, "/auth/sign-up", "alice", "pw2").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = json_body(second).await;
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));

    // the original record is untouched: the first password still signs in
    let sign_in = post_credentials(&app, "/auth/sign-in", "alice", "pw1").await;
    assert_eq!(sign_in.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_sign_up_rejects_invalid_username() {
    let (app, _) = spawn_app();

    let response = post_credentials(&app, "/auth/sign-up", "a", "pw1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_sign_in_returns_token_for_valid_credentials() {
    let (app, codec) = spawn_app();

    post_credentials(&app, "/auth/sign-up", "bob", "pass_word!").await;

    let response = post_credentials(&app, "/auth/sign-in", "bob", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::OK);

    let token = token_of(response).await;
    assert_eq!(codec.extract_subject(&token).unwrap(), "bob");
}

#[tokio::test]
async fn test_sign_in_rejects_wrong_password() {
    let (app, _) = spawn_app();

    post_credentials(&app, "/auth/sign-up", "bob", "pass_word!").await;

    let response = post_credentials(&app, "/auth/sign-in", "bob", "not-the-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sign_in_rejects_unknown_username() {
    let (app, _) = spawn_app();

    let response = post_credentials(&app, "/auth/sign-in", "nobody", "pw1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_check_accepts_issued_token() {
    let (app, _) = spawn_app();

    let sign_up = post_credentials(&app, "/auth/sign-up", "alice", "pw1").await;
    let token = token_of(sign_up).await;

    let response = get_auth(&app, Some(&format!("Bearer {}", token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "authenticated successfully");
}

#[tokio::test]
async fn test_auth_check_rejects_missing_header() {
    let (app, _) = spawn_app();

    let response = get_auth(&app, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("authentication required"));
}

#[tokio::test]
async fn test_auth_check_rejects_expired_token() {
    let (app, _) = spawn_app();

    let authorization = format!("Bearer {}", expired_token("alice"));
    let response = get_auth(&app, Some(&authorization)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_check_rejects_garbage_token() {
    let (app, _) = spawn_app();

    let response = get_auth(&app, Some("Bearer not.a.token")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_check_rejects_non_bearer_scheme() {
    let (app, _) = spawn_app();

    let sign_up = post_credentials(&app, "/auth/sign-up", "alice", "pw1").await;
    let token = token_of(sign_up).await;

    let response = get_auth(&app, Some(&format!("Basic {}", token))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_check_rejects_token_signed_under_other_key() {
    let (app, _) = spawn_app();

    // a token from a previous process incarnation: same shape, other secret
    let other = TokenCodec::new(
        b"an-entirely-different-signing-key-from-a-previous-process-life!!",
        Duration::hours(5),
    );
    let token = other.issue("alice").unwrap();

    let response = get_auth(&app, Some(&format!("Bearer {}", token))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sign_up_then_check_then_duplicate_scenario() {
    let (app, _) = spawn_app();

    let sign_up = post_credentials(&app, "/auth/sign-up", "alice", "pw1").await;
    assert_eq!(sign_up.status(), StatusCode::OK);
    let token = token_of(sign_up).await;

    let check = get_auth(&app, Some(&format!("Bearer {}", token))).await;
    assert_eq!(check.status(), StatusCode::OK);
    assert_eq!(text_body(check).await, "authenticated successfully");

    let duplicate = post_credentials(&app, "/auth/sign-up", "alice", "pw2").await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}
