//! Auth Form Component
//!
//! Email/password form shared by the login and register pages.

use leptos::prelude::*;

use super::ErrorBanner;

/// Credentials form. Both fields are `required`, so the browser blocks
/// empty submissions before `on_submit` runs.
#[component]
pub fn AuthForm(
    heading: &'static str,
    subheading: &'static str,
    submit_label: &'static str,
    busy_label: &'static str,
    loading: ReadSignal<bool>,
    error: ReadSignal<String>,
    /// Called with (email, password)
    #[prop(into)] on_submit: Callback<(String, String)>,
    /// Link shown below the form
    children: Children,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run((email.get(), password.get()));
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <h2>{heading}</h2>
                    <p>{subheading}</p>
                </div>

                <ErrorBanner message=error />

                <form class="auth-form" on:submit=submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" class="primary-btn" disabled=move || loading.get()>
                        {move || if loading.get() { busy_label } else { submit_label }}
                    </button>
                </form>

                <div class="auth-footer">{children()}</div>
            </div>
        </div>
    }
}
