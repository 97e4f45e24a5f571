//! Top navigation bar linking the four routes.

use leptos::prelude::*;

use crate::consts;

/// Navigation bar rendered above every page.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <a class="nav-bar__link" href=consts::REGISTER_PATH>"Register"</a>
            <a class="nav-bar__link" href=consts::LOGIN_PATH>"Login"</a>
            <a class="nav-bar__link" href=consts::LOGOUT_PATH>"Logout"</a>
            <a class="nav-bar__link" href=consts::DASHBOARD_PATH>"Dashboard"</a>
        </nav>
    }
}
