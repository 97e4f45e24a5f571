//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Transitions here are pure;
//! the persistence side effect lives in [`crate::state::session`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

/// Authentication state tracking the current user record.
///
/// The record is opaque: any JSON value the register/login flow hands over
/// is stored as-is, without shape validation. `is_logged_in` and the
/// presence of `user` are only ever written together, so
/// `is_logged_in == user.is_some()` holds after every transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Value>,
    pub is_logged_in: bool,
}

impl AuthState {
    /// The logged-out state: no user record, flag cleared.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Hydrate from a persisted record. A present record resumes the
    /// session; an absent one starts logged out.
    pub fn from_persisted(record: Option<Value>) -> Self {
        match record {
            Some(user) => Self { user: Some(user), is_logged_in: true },
            None => Self::logged_out(),
        }
    }

    /// Replace the user record and mark the session logged in. Serves both
    /// register-success and login-success, which have identical effect.
    pub fn apply_login(&mut self, payload: Value) {
        self.user = Some(payload);
        self.is_logged_in = true;
    }

    /// Clear the user record and mark the session logged out. Idempotent.
    pub fn apply_logout(&mut self) {
        self.user = None;
        self.is_logged_in = false;
    }
}
