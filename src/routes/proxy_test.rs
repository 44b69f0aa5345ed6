use super::*;
use axum::http::HeaderValue;
use axum::http::header::{AUTHORIZATION, CONNECTION, CONTENT_TYPE, TRANSFER_ENCODING};

fn upstream(base: &str) -> Upstream {
    Upstream::new(base, Duration::from_secs(1)).unwrap()
}

#[test]
fn target_url_joins_base_and_path() {
    let up = upstream("http://backend:8000");
    assert_eq!(up.target_url("portfolio/", None), "http://backend:8000/portfolio/");
    assert_eq!(up.target_url("/auth/login", None), "http://backend:8000/auth/login");
}

#[test]
fn target_url_keeps_query_string() {
    let up = upstream("http://backend:8000/");
    assert_eq!(
        up.target_url("news/market", Some("limit=5")),
        "http://backend:8000/news/market?limit=5"
    );
    assert_eq!(up.target_url("alerts/", Some("")), "http://backend:8000/alerts/");
}

#[test]
fn upstream_path_strips_mount_and_keeps_encoding() {
    assert_eq!(upstream_path("/api/portfolio/"), "/portfolio/");
    assert_eq!(upstream_path("/api/portfolio/M%26M%3Fx%23y"), "/portfolio/M%26M%3Fx%23y");
    assert_eq!(upstream_path("/api/news/stock/A%2FB"), "/news/stock/A%2FB");
}

#[test]
fn hop_by_hop_and_host_headers_are_dropped() {
    assert!(!is_forwarded_header(&HOST));
    assert!(!is_forwarded_header(&CONTENT_LENGTH));
    assert!(!is_forwarded_header(&CONNECTION));
    assert!(!is_forwarded_header(&TRANSFER_ENCODING));
    assert!(!is_forwarded_header(&HeaderName::from_static("keep-alive")));
}

#[test]
fn end_to_end_headers_are_forwarded() {
    assert!(is_forwarded_header(&AUTHORIZATION));
    assert!(is_forwarded_header(&CONTENT_TYPE));
    assert!(is_forwarded_header(&HeaderName::from_static("x-request-id")));
}

#[test]
fn forwarded_headers_filters_map() {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(HOST).is_none());
}
