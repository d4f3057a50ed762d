//! Task Manager API
//!
//! Typed access to the task manager backend: models, the bearer-token
//! HTTP client, session persistence and the flows the pages drive.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod tasks;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use models::{
    CreateTaskResponse, Credentials, LoginResponse, MessageResponse, Session, Task, TaskInput,
    User,
};
pub use session::{MemorySessionStore, SessionStore, TOKEN_KEY, USER_KEY};
pub use tasks::{TaskDraft, TaskList, TaskLoad};
