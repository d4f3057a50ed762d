//! Header Component
//!
//! App title, navigation and the signed-in user's greeting.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::store::use_app_store;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let logout = move |_: leptos::ev::MouseEvent| {
        ctx.logout(&store);
        web_sys::console::log_1(&"[HEADER] Logged out".into());
        navigate("/login", Default::default());
    };

    view! {
        <header class="app-header">
            <h1 class="app-title">"Task Manager"</h1>
            <nav class="app-nav">
                <A href="/">"Tasks"</A>
                {move || match ctx.user.get() {
                    Some(user) => view! {
                        <span class="greeting">"Hello, " {user.email}</span>
                        <button class="logout-btn" on:click=logout.clone()>"Logout"</button>
                    }.into_any(),
                    None => view! {
                        <A href="/login">"Login"</A>
                        <A href="/register">"Register"</A>
                    }.into_any(),
                }}
            </nav>
        </header>
    }
}
