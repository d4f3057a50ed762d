//! Auth Facade
//!
//! Login and registration, plus establishing and ending the stored session.

use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Credentials, LoginResponse, MessageResponse, Session};
use crate::session::SessionStore;

pub const LOGIN_FAILED: &str = "Failed to login";
pub const REGISTER_FAILED: &str = "Failed to register";

impl<S: SessionStore> ApiClient<S> {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.send_json(Method::POST, "/api/login", &Credentials { email, password })
            .await
    }

    /// Creates the account only; the caller still has to log in
    pub async fn register(&self, email: &str, password: &str) -> Result<MessageResponse> {
        self.send_json(Method::POST, "/api/register", &Credentials { email, password })
            .await
    }
}

/// Log in and persist the session. Nothing is stored when login fails.
pub async fn sign_in<S: SessionStore>(
    client: &ApiClient<S>,
    email: &str,
    password: &str,
) -> Result<Session> {
    let resp = client.login(email, password).await?;
    let message = resp.message.clone();
    let session = resp.into_session();
    client.session().save(&session)?;
    info!(user_id = session.user.id, ?message, "signed in");
    Ok(session)
}

/// Drop both persisted session keys
pub fn sign_out<S: SessionStore>(store: &S) {
    store.clear();
    info!("signed out");
}
