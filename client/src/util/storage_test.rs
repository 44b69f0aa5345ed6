#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn session_keys_match_persisted_names() {
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USER_KEY, "user");
}

#[test]
fn loads_are_empty_outside_browser() {
    assert_eq!(load_token(), None);
    assert_eq!(load_user(), None);
    assert_eq!(load_string("anything"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    save_token("abc");
    save_user(&UserProfile { name: "a".to_owned(), email: "a@b.com".to_owned() });
    clear_session();
    assert_eq!(load_token(), None);
}

#[test]
fn user_profile_json_round_trips_through_storage_encoding() {
    let user = UserProfile { name: "Asha".to_owned(), email: "asha@example.com".to_owned() };
    let raw = encode_json(&user).unwrap();
    assert_eq!(raw, r#"{"name":"Asha","email":"asha@example.com"}"#);
    assert_eq!(decode_json::<UserProfile>(&raw), Some(user));
}

#[test]
fn corrupt_user_record_decodes_as_none() {
    assert_eq!(decode_json::<UserProfile>("{not json"), None);
    assert_eq!(decode_json::<UserProfile>(r#"{"name": "x"}"#), None);
}
