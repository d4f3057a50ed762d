//! API Error Types
//!
//! Every facade call resolves to one of these; pages turn them into inline
//! messages or, for `Unauthorized`, a redirect to the login screen.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, DNS)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401: token missing, invalid or expired
    #[error("Unauthorized{}", suffix(.message))]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response
    #[error("HTTP {status}{}", suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Session could not be read from or written to storage
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// The session is no longer valid and the user has to sign in again
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message provided by the server, if the response carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for an inline error banner: the server's message verbatim, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
