use super::*;

#[test]
fn validate_login_input_trims_and_requires_value() {
    assert_eq!(validate_login_input("  user@example.com  "), Ok("user@example.com".to_owned()));
    assert_eq!(validate_login_input("   "), Err("Enter an email first."));
}

#[test]
fn display_name_takes_local_part() {
    assert_eq!(display_name("alice@example.com"), "alice");
}

#[test]
fn display_name_falls_back_to_whole_value() {
    assert_eq!(display_name("not-an-email"), "not-an-email");
}

#[test]
fn login_payload_carries_derived_name_and_email() {
    let payload = login_payload("bob@example.com");
    assert_eq!(payload["name"], "bob");
    assert_eq!(payload["email"], "bob@example.com");
    assert!(payload["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[test]
fn login_payload_never_contains_a_password() {
    let payload = login_payload("bob@example.com");
    assert!(payload.get("password").is_none());
}
