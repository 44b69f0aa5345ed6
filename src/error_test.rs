use super::*;

#[test]
fn upstream_failure_maps_to_bad_gateway() {
    let err = AppError::Upstream("connection refused".into());
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.to_string(), "upstream request failed: connection refused");
}

#[test]
fn startup_errors_map_to_internal_error() {
    assert_eq!(AppError::Config("bad".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(AppError::Leptos("missing".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn response_body_carries_detail() {
    let response = AppError::Upstream("timed out".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["detail"], "upstream request failed: timed out");
}
