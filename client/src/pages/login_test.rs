use super::*;

#[test]
fn profile_uses_email_for_name_and_email() {
    let profile = login_profile("demo@demo.com");
    assert_eq!(profile.name, "demo@demo.com");
    assert_eq!(profile.email, "demo@demo.com");
}

#[test]
fn form_is_prefilled_with_demo_account() {
    assert_eq!(DEMO_EMAIL, "demo@demo.com");
    assert_eq!(DEMO_PASSWORD, "demo123");
}

#[test]
fn sign_in_toast_matches_register_flow() {
    assert_eq!(LOGIN_SUCCESS, "Successfully logged in!");
}
