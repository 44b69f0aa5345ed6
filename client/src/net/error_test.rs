use super::*;

#[test]
fn status_401_maps_to_unauthorized_with_detail() {
    let err = ApiError::from_status(401, r#"{"detail": "Incorrect username or password"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.detail(), Some("Incorrect username or password"));
}

#[test]
fn other_status_keeps_code_and_detail() {
    let err = ApiError::from_status(404, r#"{"detail": "Stock data not found"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 404, detail: Some("Stock data not found".to_owned()) }
    );
    assert!(!err.is_unauthorized());
}

#[test]
fn non_json_body_has_no_detail() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
}

#[test]
fn validation_detail_list_joins_messages() {
    let body = r#"{"detail": [{"loc": ["body", "password"], "msg": "too short"}, {"msg": "not alphanumeric"}]}"#;
    assert_eq!(parse_detail(body), Some("too short; not alphanumeric".to_owned()));
}

#[test]
fn empty_or_null_detail_is_ignored() {
    assert_eq!(parse_detail(r#"{"detail": ""}"#), None);
    assert_eq!(parse_detail(r#"{"detail": null}"#), None);
    assert_eq!(parse_detail(r#"{"other": 1}"#), None);
}

#[test]
fn user_message_prefers_detail_over_fallback() {
    let with_detail = ApiError::Status { status: 400, detail: Some("Username taken".to_owned()) };
    let without = ApiError::Network("offline".to_owned());
    assert_eq!(with_detail.user_message("Registration failed"), "Username taken");
    assert_eq!(without.user_message("Registration failed"), "Registration failed");
}

#[test]
fn display_messages_are_stable() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(ApiError::Status { status: 500, detail: None }.to_string(), "request failed: 500");
}
