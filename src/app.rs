//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, logout::LogoutPage, register::RegisterPage,
};
use crate::state::session::{self, BrowserSession};

/// Root application component.
///
/// Hydrates the session from the persisted record, provides it as a shared
/// context signal, and sets up client-side routing with the nav bar above
/// every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(session::restore(&BrowserSession));
    provide_context(auth);

    view! {
        <Title text="Vestibule"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
