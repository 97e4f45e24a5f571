//! Session lifecycle operations and the persistence mirror.
//!
//! DESIGN
//! ======
//! The pure transitions on [`AuthState`] never touch storage; the functions
//! here sequence the storage write first and the state change second, so a
//! caller always leaves memory and the persisted record in agreement.
//! Storage is behind the [`SessionStore`] trait: the browser uses
//! `localStorage` through [`BrowserSession`], native tests use
//! [`MemorySession`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use serde_json::Value;

use crate::consts;
use crate::state::auth::AuthState;
use crate::util::persistence;

/// Single-slot storage for the serialized user record.
pub trait SessionStore {
    /// Read and deserialize the persisted record, if any.
    fn load(&self) -> Option<Value>;
    /// Serialize `user` and replace the persisted record.
    fn save(&self, user: &Value);
    /// Delete the persisted record.
    fn clear(&self);
}

/// `localStorage`-backed store under [`consts::SESSION_STORAGE_KEY`].
/// Inert on non-browser targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn load(&self) -> Option<Value> {
        persistence::load_json(consts::SESSION_STORAGE_KEY)
    }

    fn save(&self, user: &Value) {
        persistence::save_json(consts::SESSION_STORAGE_KEY, user);
    }

    fn clear(&self) {
        persistence::remove(consts::SESSION_STORAGE_KEY);
    }
}

/// In-process store holding the record as serialized text, mirroring the
/// `localStorage` contract. Backs the native test suite.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    record: RefCell<Option<String>>,
}

impl MemorySession {
    /// The raw persisted text, as `localStorage` would hold it.
    pub fn raw_record(&self) -> Option<String> {
        self.record.borrow().clone()
    }

    /// Seed the store with raw text, bypassing serialization.
    pub fn set_raw_record(&self, raw: &str) {
        *self.record.borrow_mut() = Some(raw.to_owned());
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Option<Value> {
        let raw = self.record.borrow().clone()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding malformed session record: {err}");
                None
            }
        }
    }

    fn save(&self, user: &Value) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        *self.record.borrow_mut() = Some(raw);
    }

    fn clear(&self) {
        *self.record.borrow_mut() = None;
    }
}

/// Hydrate the session from the persisted record. An absent or unreadable
/// record starts the session logged out.
pub fn restore(store: &impl SessionStore) -> AuthState {
    AuthState::from_persisted(store.load())
}

/// Persist `payload` as the current user and mark the session logged in.
/// Accepts any payload shape and always succeeds.
pub fn register_success(store: &impl SessionStore, state: &mut AuthState, payload: Value) {
    store.save(&payload);
    state.apply_login(payload);
    log::info!("session established");
}

/// Identical effect to [`register_success`]; kept as a distinct operation
/// so call sites read as what the user did.
pub fn login_success(store: &impl SessionStore, state: &mut AuthState, payload: Value) {
    register_success(store, state, payload);
}

/// Delete the persisted record and mark the session logged out. Idempotent.
pub fn logout(store: &impl SessionStore, state: &mut AuthState) {
    store.clear();
    state.apply_logout();
    log::info!("session cleared");
}
