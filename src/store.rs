//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use task_api::{Task, TaskList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks shown on the task page, in fetch order
    pub task_list: TaskList,
    /// Confirmation message from the last successful action
    pub notice: NoticeState,
}

/// A confirmation message tagged with its generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Current flash notice plus a generation counter, so a dismiss timer only
/// clears the notice it was started for even when two messages read the same
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    seq: u64,
    current: Option<Notice>,
}

impl NoticeState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current.as_ref().is_some_and(|n| n.id == id)
    }

    /// Show `message`, replacing any current notice. Returns its id.
    pub fn push(&mut self, message: String) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { id: self.seq, message });
        self.seq
    }

    /// Clear the notice only if it is still generation `id`
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a fresh fetch
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.task_list().set(TaskList::new(tasks));
}

/// Append a newly created task
pub fn store_add_task(store: &AppStore, task: Task) {
    store.task_list().write().append(task);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: i64) {
    store.task_list().write().remove(task_id);
}

pub fn store_clear_tasks(store: &AppStore) {
    store.task_list().set(TaskList::default());
}

/// Show a confirmation message
pub fn store_notify(store: &AppStore, message: String) {
    store.notice().write().push(message);
}
