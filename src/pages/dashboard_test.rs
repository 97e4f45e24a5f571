use super::*;
use serde_json::json;

#[test]
fn greeting_uses_record_name() {
    let user = json!({"id": "u1", "name": "Alice"});
    assert_eq!(dashboard_greeting(Some(&user)), "Welcome to the Dashboard, Alice!");
}

#[test]
fn greeting_without_name_field_is_plain() {
    let user = json!({"id": "u1"});
    assert_eq!(dashboard_greeting(Some(&user)), "Welcome to the Dashboard!");
}

#[test]
fn greeting_tolerates_non_object_records() {
    assert_eq!(dashboard_greeting(Some(&json!(42))), "Welcome to the Dashboard!");
    assert_eq!(dashboard_greeting(None), "Welcome to the Dashboard!");
}

#[test]
fn greeting_requires_string_name() {
    let user = json!({"name": 7});
    assert_eq!(dashboard_greeting(Some(&user)), "Welcome to the Dashboard!");
}
