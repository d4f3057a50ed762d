//! Task Facade
//!
//! CRUD calls against `/api/tasks` and the list/draft state the task page
//! works with.

use reqwest::Method;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateTaskResponse, Task, TaskInput};
use crate::session::SessionStore;

pub const FETCH_FAILED: &str = "Failed to fetch tasks";
pub const CREATE_FAILED: &str = "Failed to create task";
pub const DELETE_FAILED: &str = "Failed to delete task";

impl<S: SessionStore> ApiClient<S> {
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/api/tasks").await
    }

    pub async fn create_task(&self, title: &str, description: &str) -> Result<CreateTaskResponse> {
        self.send_json(Method::POST, "/api/tasks", &TaskInput { title, description })
            .await
    }

    pub async fn update_task(&self, id: i64, title: &str, description: &str) -> Result<Task> {
        self.send_json(
            Method::PUT,
            &format!("/api/tasks/{}", id),
            &TaskInput { title, description },
        )
        .await
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/api/tasks/{}", id))
            .await
    }
}

// ========================
// Page Flows
// ========================

/// Outcome of the initial task fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskLoad {
    Loaded(Vec<Task>),
    /// Server answered 401; show the login screen instead of an error
    LoginRequired,
    Failed(String),
}

pub async fn load_tasks<S: SessionStore>(client: &ApiClient<S>) -> TaskLoad {
    match client.list_tasks().await {
        Ok(tasks) => TaskLoad::Loaded(tasks),
        Err(e) if e.is_unauthorized() => TaskLoad::LoginRequired,
        Err(e) => {
            debug!(error = %e, "task fetch failed");
            TaskLoad::Failed(FETCH_FAILED.to_string())
        }
    }
}

/// Add-task form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Blank or whitespace-only titles never reach the network
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Create the drafted task. `Ok(None)` means the draft was not submittable
/// and no request was made.
pub async fn add_task<S: SessionStore>(
    client: &ApiClient<S>,
    draft: &TaskDraft,
) -> Result<Option<CreateTaskResponse>> {
    if !draft.is_submittable() {
        return Ok(None);
    }
    client
        .create_task(&draft.title, &draft.description)
        .await
        .map(Some)
}

/// Client-side copy of the user's tasks in fetch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove the task with `id`, keeping the rest in order. Returns whether one was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }
}
