use super::*;

#[test]
fn validate_register_input_trims_both_fields() {
    assert_eq!(
        validate_register_input("  Alice  ", " alice@example.com "),
        Ok(("Alice".to_owned(), "alice@example.com".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_name_and_email() {
    assert_eq!(validate_register_input("", "a@b.com"), Err("Enter both name and email."));
    assert_eq!(validate_register_input("Alice", "   "), Err("Enter both name and email."));
}

#[test]
fn registration_payload_carries_name_and_email() {
    let payload = registration_payload("Alice", "alice@example.com");
    assert_eq!(payload["name"], "Alice");
    assert_eq!(payload["email"], "alice@example.com");
}

#[test]
fn registration_payload_generates_nonempty_id() {
    let payload = registration_payload("Alice", "alice@example.com");
    assert!(payload["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[test]
fn registration_payload_never_contains_a_password() {
    let payload = registration_payload("Alice", "alice@example.com");
    assert!(payload.get("password").is_none());
}

#[test]
fn registration_payloads_get_distinct_ids() {
    let first = registration_payload("A", "a@example.com");
    let second = registration_payload("A", "a@example.com");
    assert_ne!(first["id"], second["id"]);
}
