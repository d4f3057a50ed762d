//! Routed Pages

mod login;
mod register;
mod tasks;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use tasks::TasksPage;
