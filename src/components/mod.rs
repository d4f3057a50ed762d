//! UI Components
//!
//! Reusable Leptos components.

mod auth_form;
mod error_banner;
mod flash_notice;
mod header;
mod new_task_form;
mod task_item;

pub use auth_form::AuthForm;
pub use error_banner::ErrorBanner;
pub use flash_notice::FlashNotice;
pub use header::Header;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
