use super::*;

fn form(name: &str, password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        name: name.to_owned(),
        email: "asha@example.com".to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

#[test]
fn mismatched_passwords_are_rejected_locally() {
    assert_eq!(form("Asha", "secret123", "secret124").check(), Err("Passwords do not match."));
    assert_eq!(form("Asha", "secret123", "secret123").check(), Ok(()));
}

#[test]
fn profile_keeps_entered_email() {
    let profile = form("Asha", "a", "a").profile();
    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.email, "asha@example.com");
}

#[test]
fn blank_name_falls_back_to_demo_user() {
    assert_eq!(form("  ", "a", "a").profile().name, "Demo User");
}
