//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use task_api::auth::REGISTER_FAILED;

use crate::components::AuthForm;
use crate::context::use_app_context;
use crate::store::{store_notify, use_app_store};

/// Registration does not sign the user in; success leads to the login page
#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        set_error.set(String::new());
        set_loading.set(true);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.register(&email, &password).await {
                Ok(resp) => {
                    store_notify(&store, resp.message);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[REGISTER] {}", e).into());
                    set_error.set(e.user_message(REGISTER_FAILED));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <AuthForm
            heading="Create Account"
            subheading="Join us to manage your tasks"
            submit_label="Create account"
            busy_label="Creating account..."
            loading=loading
            error=error
            on_submit=on_submit
        >
            <A href="/login">"Already have an account? Sign in"</A>
        </AuthForm>
    }
}
