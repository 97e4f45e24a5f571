//! Logout page: a single button that clears the session.
//!
//! Clearing the session flips the auth signal, so the page's own guard
//! carries the now-logged-out visitor to `/login` right after the
//! confirmation notice is dismissed.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::consts;
use crate::state::auth::AuthState;
use crate::state::session::{self, BrowserSession};
use crate::util::auth::install_session_guard;

const LOGOUT_NOTICE: &str = "Logged out successfully!";

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_session_guard(auth, consts::LOGOUT_PATH, navigate);

    let on_logout = move |_| {
        auth.update(|state| session::logout(&BrowserSession, state));
        confirm_logout();
    };

    view! {
        <div class="logout-page">
            <button class="logout-button" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}

/// Blocking confirmation notice. No-op outside the browser.
fn confirm_logout() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(LOGOUT_NOTICE);
        }
    }
}
