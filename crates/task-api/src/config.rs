//! API Configuration
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! origin is fixed at build time through `TASK_API_URL`.

/// Backend origin used when `TASK_API_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `TASK_API_URL` captured at compile time, falling back to the default origin
    pub fn from_env() -> Self {
        match option_env!("TASK_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Join an absolute API path onto the base origin
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://tasks.example.com/");
        assert_eq!(config.url("/api/tasks"), "https://tasks.example.com/api/tasks");
    }

    #[test]
    fn test_default_origin() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
