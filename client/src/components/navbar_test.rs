use super::*;

#[test]
fn page_key_uses_first_segment() {
    assert_eq!(page_key("/"), "dashboard");
    assert_eq!(page_key("/portfolio"), "portfolio");
    assert_eq!(page_key("/alerts/"), "alerts");
}

#[test]
fn page_labels_map_known_pages() {
    assert_eq!(page_label("prediction"), "AI Prediction Engine");
    assert_eq!(page_label("advisor"), "AI Strategy Advisor");
}

#[test]
fn unknown_page_label_falls_back_to_key() {
    assert_eq!(page_label("settings"), "settings");
}
