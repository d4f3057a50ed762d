//! Browser Session Storage
//!
//! `localStorage` backend for the token and user keys.

use task_api::{ApiError, SessionStore};

/// Session store backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> task_api::Result<()> {
        let storage = Self::storage().ok_or_else(|| ApiError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| ApiError::storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            web_sys::console::warn_1(&format!("[STORAGE] localStorage unavailable, {} not removed", key).into());
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            web_sys::console::warn_1(&format!("[STORAGE] Failed to remove {}: {:?}", key, e).into());
        }
    }
}
