//! Dashboard page — the placeholder destination for a logged-in session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde_json::Value;

use crate::consts;
use crate::state::auth::AuthState;
use crate::util::auth::install_session_guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_session_guard(auth, consts::DASHBOARD_PATH, navigate);

    let greeting = move || {
        let state = auth.get();
        dashboard_greeting(state.user.as_ref())
    };

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">{greeting}</h1>
        </div>
    }
}

/// Greet by the record's `name` field when it has one; the record is
/// opaque, so any other shape falls back to the plain greeting.
fn dashboard_greeting(user: Option<&Value>) -> String {
    match user.and_then(|u| u.get("name")).and_then(Value::as_str) {
        Some(name) => format!("Welcome to the Dashboard, {name}!"),
        None => "Welcome to the Dashboard!".to_owned(),
    }
}
