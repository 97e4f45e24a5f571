//! Registration page at the site root.
//!
//! Submitting the form builds a fresh user record, establishes the session
//! through the persistence mirror, and moves on to the dashboard. There is
//! no server to register against; the record never leaves the browser.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::consts;
use crate::state::auth::AuthState;
use crate::state::session::{self, BrowserSession};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_register_input(&name.get(), &email.get()) {
            Ok((name_value, email_value)) => {
                let payload = registration_payload(&name_value, &email_value);
                auth.update(|state| session::register_success(&BrowserSession, state, payload));
                navigate(consts::DASHBOARD_PATH, NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <button class="auth-button" type="submit">"Register"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Trim the form fields and require both name and email; the password is
/// accepted as-is and never stored.
fn validate_register_input(name: &str, email: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter both name and email.");
    }
    Ok((name.to_owned(), email.to_owned()))
}

/// The user record persisted for this session. Deliberately excludes the
/// password: nothing ever checks it, so nothing should retain it.
fn registration_payload(name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "name": name,
        "email": email,
    })
}
