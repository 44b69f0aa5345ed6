use super::*;

#[test]
fn root_path_activates_dashboard() {
    assert!(is_active("/dashboard", "/"));
    assert!(is_active("/dashboard", ""));
    assert!(!is_active("/portfolio", "/"));
}

#[test]
fn trailing_slash_is_ignored() {
    assert!(is_active("/alerts", "/alerts/"));
    assert!(is_active("/prediction", "/prediction"));
}

#[test]
fn education_is_reachable() {
    assert!(NAV_ITEMS.iter().any(|(path, label, _)| *path == "/education" && *label == "Education"));
    assert_eq!(NAV_ITEMS.len(), 6);
}
