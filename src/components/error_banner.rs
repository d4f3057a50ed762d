use leptos::prelude::*;

/// Inline error message, hidden while empty
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner" role="alert">{move || message.get()}</div>
        </Show>
    }
}
