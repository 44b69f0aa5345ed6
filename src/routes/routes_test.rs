use axum::Json;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

use super::*;

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    if uri.path() == "/auth/me" {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" }))).into_response();
    }
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": header("authorization"),
        "host": header("host"),
        "body": body,
    }))
    .into_response()
}

/// Start a throwaway backend on an ephemeral port and return its base URL.
async fn spawn_backend() -> String {
    let app = Router::new().route("/{*path}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing is listening on.
async fn closed_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn router(base: &str) -> Router {
    api_routes(Upstream::new(base, Duration::from_secs(5)).unwrap())
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = router(&closed_backend().await);
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn proxy_forwards_method_path_query_body_and_auth() {
    let base = spawn_backend().await;
    let app = router(&base);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/portfolio/add?source=prediction")
        .header("authorization", "Bearer t0k3n")
        .header("host", "frontend.example")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"symbol":"TCS","quantity":2,"buy_price":3900}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/portfolio/add");
    assert_eq!(body["query"], "source=prediction");
    assert_eq!(body["authorization"], "Bearer t0k3n");
    assert_ne!(body["host"], "frontend.example");
    assert_eq!(body["body"], r#"{"symbol":"TCS","quantity":2,"buy_price":3900}"#);
}

#[tokio::test]
async fn proxy_keeps_trailing_slash_on_collection_paths() {
    let base = spawn_backend().await;
    let response = router(&base)
        .oneshot(Request::builder().uri("/api/alerts/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["method"], "GET");
    assert_eq!(body["path"], "/alerts/");
}

#[tokio::test]
async fn proxy_keeps_encoded_characters_inside_their_segment() {
    let base = spawn_backend().await;
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/portfolio/M%26M%3Fx%23y")
        .body(Body::empty())
        .unwrap();
    let body = json_body(router(&base).oneshot(request).await.unwrap()).await;
    assert_eq!(body["method"], "DELETE");
    assert_eq!(body["path"], "/portfolio/M%26M%3Fx%23y");
    assert!(body["query"].is_null());
}

#[tokio::test]
async fn proxy_relays_upstream_error_status_and_body() {
    let base = spawn_backend().await;
    let response = router(&base)
        .oneshot(Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["detail"], "Not authenticated");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_with_detail() {
    let response = router(&closed_backend().await)
        .oneshot(Request::builder().uri("/api/portfolio/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("upstream request failed"));
}
