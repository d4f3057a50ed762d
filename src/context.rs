//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use task_api::{auth, ApiClient, ApiConfig, SessionStore, User};

use crate::storage::LocalSessionStore;
use crate::store::{store_clear_tasks, AppStore};

/// API client used by every page
pub type Api = ApiClient<LocalSessionStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Api, LocalStorage>,
    /// Signed-in user for the header - read
    pub user: ReadSignal<Option<User>>,
    /// Signed-in user for the header - write
    set_user: WriteSignal<Option<User>>,
}

impl AppContext {
    /// Build the client and load any stored user once
    pub fn new() -> Self {
        let api = ApiClient::new(ApiConfig::from_env(), LocalSessionStore);
        let (user, set_user) = signal(api.session().user());
        web_sys::console::log_1(
            &format!("[APP] API at {}, session: {}", api.config().base_url, user.get_untracked().is_some()).into(),
        );
        Self {
            api: StoredValue::new_local(api),
            user,
            set_user,
        }
    }

    /// Owned handle for use inside `spawn_local`
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn set_user(&self, user: Option<User>) {
        self.set_user.set(user);
    }

    /// Clear persisted and in-memory session state, including the cached tasks
    pub fn logout(&self, store: &AppStore) {
        self.api.with_value(|api| auth::sign_out(api.session()));
        self.set_user.set(None);
        store_clear_tasks(store);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use reactive_stores::Store;
    use task_api::{Session, Task, TOKEN_KEY, USER_KEY};
    use wasm_bindgen_test::*;

    use crate::store::{store_add_task, AppState, AppStateStoreFields};

    wasm_bindgen_test_configure!(run_in_browser);

    fn user() -> User {
        User {
            id: 1,
            email: "ada@example.com".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_logout_resets_header_storage_and_tasks() {
        LocalSessionStore
            .save(&Session {
                token: "tok".to_string(),
                user: user(),
            })
            .unwrap();
        let ctx = AppContext::new();
        assert_eq!(ctx.user.get_untracked(), Some(user()));

        let store = Store::new(AppState::default());
        store_add_task(
            &store,
            Task {
                id: 1,
                title: "Buy milk".to_string(),
                description: String::new(),
                user_id: 1,
            },
        );

        ctx.logout(&store);

        assert_eq!(ctx.user.get_untracked(), None);
        assert_eq!(LocalSessionStore.get(TOKEN_KEY), None);
        assert_eq!(LocalSessionStore.get(USER_KEY), None);
        assert!(store.task_list().read_untracked().is_empty());
    }
}
