//! Session Store
//!
//! Durable key-value persistence of the bearer token and user record.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{ApiError, Result};
use crate::models::{Session, User};

/// Storage key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user
pub const USER_KEY: &str = "user";

/// Key-value backend for the session (browser `localStorage`, or memory in tests)
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);

    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored user, ignoring a record that no longer parses
    fn user(&self) -> Option<User> {
        self.get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    fn load(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    fn save(&self, session: &Session) -> Result<()> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| ApiError::storage(e.to_string()))?;
        // Both keys or neither; a lone token would still authenticate requests
        let written = self
            .set(TOKEN_KEY, &session.token)
            .and_then(|()| self.set(USER_KEY, &user));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Remove both keys together
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: &Session) -> Result<Self> {
        let store = Self::new();
        store.save(session)?;
        Ok(store)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
