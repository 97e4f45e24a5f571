use super::*;
use serde_json::json;

use crate::state::session::{self, MemorySession};

// =============================================================
// Guard table
// =============================================================

#[test]
fn dashboard_requires_session() {
    assert_eq!(redirect_target(consts::DASHBOARD_PATH, false), Some(consts::LOGIN_PATH));
    assert_eq!(redirect_target(consts::DASHBOARD_PATH, true), None);
}

#[test]
fn logout_requires_session() {
    assert_eq!(redirect_target(consts::LOGOUT_PATH, false), Some(consts::LOGIN_PATH));
    assert_eq!(redirect_target(consts::LOGOUT_PATH, true), None);
}

#[test]
fn login_bounces_established_session_to_dashboard() {
    assert_eq!(redirect_target(consts::LOGIN_PATH, true), Some(consts::DASHBOARD_PATH));
    assert_eq!(redirect_target(consts::LOGIN_PATH, false), None);
}

#[test]
fn register_is_always_reachable() {
    assert_eq!(redirect_target(consts::REGISTER_PATH, false), None);
    assert_eq!(redirect_target(consts::REGISTER_PATH, true), None);
}

#[test]
fn unknown_paths_are_never_redirected() {
    assert_eq!(redirect_target("/settings", false), None);
    assert_eq!(redirect_target("/settings", true), None);
}

// =============================================================
// Guard follows the session lifecycle
// =============================================================

#[test]
fn guard_scenario_across_login_and_logout() {
    let store = MemorySession::default();

    // Empty storage: dashboard bounces to login.
    let mut state = session::restore(&store);
    assert_eq!(
        redirect_target(consts::DASHBOARD_PATH, state.is_logged_in),
        Some(consts::LOGIN_PATH)
    );

    // After login, visiting /login bounces to the dashboard.
    session::login_success(&store, &mut state, json!({"id": 1, "name": "a"}));
    assert_eq!(
        redirect_target(consts::LOGIN_PATH, state.is_logged_in),
        Some(consts::DASHBOARD_PATH)
    );
    assert_eq!(redirect_target(consts::DASHBOARD_PATH, state.is_logged_in), None);

    // After logout, the dashboard bounces back to login.
    session::logout(&store, &mut state);
    assert_eq!(
        redirect_target(consts::DASHBOARD_PATH, state.is_logged_in),
        Some(consts::LOGIN_PATH)
    );
}
