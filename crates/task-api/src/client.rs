//! HTTP Client Wrapper
//!
//! Builds requests against the configured origin and attaches the stored
//! bearer token to every outgoing request.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::ErrorBody;
use crate::session::SessionStore;

/// API client with an injected session store
#[derive(Debug, Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(config: ApiConfig, session: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Token is read at send time, so a login or logout takes effect on the next request
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.config.url(path))
            .header(CONTENT_TYPE, "application/json");
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, self.request(Method::GET, path)).await?;
        decode(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path).json(body);
        let response = self.send(method, path, builder).await?;
        decode(response).await
    }

    /// Send a request whose success body is ignored
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        self.send(method.clone(), path, self.request(method, path)).await?;
        Ok(())
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Response> {
        debug!(%method, path, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(response).await;
        warn!(%method, path, status = status.as_u16(), ?message, "request failed");
        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized { message })
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `message` field of a JSON error body, if there is one
async fn error_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}
