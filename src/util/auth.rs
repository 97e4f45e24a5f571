//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical session-guard behavior: pages
//! that need a session bounce logged-out visitors to `/login`, and the
//! login page bounces an already-established session to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::consts;
use crate::state::auth::AuthState;

/// Where a visit to `path` should be redirected, given the session flag.
/// `None` means the page renders in place.
pub fn redirect_target(path: &str, is_logged_in: bool) -> Option<&'static str> {
    match path {
        consts::LOGIN_PATH if is_logged_in => Some(consts::DASHBOARD_PATH),
        consts::LOGOUT_PATH | consts::DASHBOARD_PATH if !is_logged_in => Some(consts::LOGIN_PATH),
        _ => None,
    }
}

/// Install the session guard for `path`: whenever the auth state changes,
/// re-evaluate [`redirect_target`] and navigate if it asks for a redirect.
pub fn install_session_guard<F>(auth: RwSignal<AuthState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(path, auth.get().is_logged_in) {
            navigate(target, NavigateOptions::default());
        }
    });
}
