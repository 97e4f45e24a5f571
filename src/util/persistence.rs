//! Browser `localStorage` helpers for the persisted session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize browser-only read/write behavior so state code
//! can mirror the session without repeating web-sys glue. On native targets
//! every function is an inert stub: loads yield `None`, writes do nothing.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`.
///
/// Malformed stored text is logged and treated as absent, so a corrupt
/// record degrades to a logged-out start instead of a startup fault.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding malformed record under {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`, replacing any previous
/// value in a single write.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`. Removing an absent key is a no-op.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
