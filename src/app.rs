//! Task Manager App
//!
//! Shell component: header plus the routed pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{FlashNotice, Header};
use crate::context::AppContext;
use crate::pages::{LoginPage, RegisterPage, TasksPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new());
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <main class="main-content">
                    <FlashNotice />
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=TasksPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
