//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use task_api::auth::{self, LOGIN_FAILED};

use crate::components::AuthForm;
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        set_error.set(String::new());
        set_loading.set(true);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::sign_in(&api, &email, &password).await {
                Ok(session) => {
                    web_sys::console::log_1(&format!("[LOGIN] Signed in as {}", session.user.email).into());
                    ctx.set_user(Some(session.user));
                    navigate("/", NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[LOGIN] {}", e).into());
                    set_error.set(e.user_message(LOGIN_FAILED));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <AuthForm
            heading="Welcome Back"
            subheading="Sign in to manage your tasks"
            submit_label="Sign in"
            busy_label="Signing in..."
            loading=loading
            error=error
            on_submit=on_submit
        >
            <A href="/register">"Don't have an account? Sign up"</A>
        </AuthForm>
    }
}
