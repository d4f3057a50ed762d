//! Flash Notice Component
//!
//! Shows the server's confirmation message and dismisses it after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields};

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn FlashNotice() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        let current = store.notice().read().current().map(|n| n.id);
        let Some(id) = current else { return };
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // A newer notice gets its own timer
            if store.notice().read_untracked().is_current(id) {
                store.notice().write().dismiss(id);
            }
        });
    });

    view! {
        {move || {
            let notice = store.notice().read().current().cloned();
            notice.map(|notice| view! {
                <div class="flash-notice" role="status">
                    <span>{notice.message}</span>
                    <button class="dismiss-btn" on:click=move |_| store.notice().write().clear()>"×"</button>
                </div>
            })
        }}
    }
}
