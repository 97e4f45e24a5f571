//! Login page.
//!
//! With no server to verify against, a login is the same local act as a
//! registration: build a record from the form and persist it. An already
//! logged-in visitor is bounced straight to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::consts;
use crate::state::auth::AuthState;
use crate::state::session::{self, BrowserSession};
use crate::util::auth::install_session_guard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_session_guard(auth, consts::LOGIN_PATH, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get()) {
            Ok(email_value) => {
                let payload = login_payload(&email_value);
                auth.update(|state| session::login_success(&BrowserSession, state, payload));
                navigate(consts::DASHBOARD_PATH, NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit">"Login"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Trim the email and require it; the password is accepted unchecked.
fn validate_login_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

/// Display name shown on the dashboard: the part before the `@`, or the
/// whole value when there is none.
fn display_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// The user record persisted for this session.
fn login_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "name": display_name(email),
        "email": email,
    })
}
