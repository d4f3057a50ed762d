//! Tasks Page
//!
//! Lists the signed-in user's tasks, with an add form and per-row delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use task_api::tasks::{self, TaskLoad, CREATE_FAILED, DELETE_FAILED};
use task_api::TaskDraft;

use crate::components::{ErrorBanner, NewTaskForm, TaskItem};
use crate::context::use_app_context;
use crate::store::{
    store_add_task, store_notify, store_remove_task, store_set_tasks, use_app_store,
    AppStateStoreFields,
};

/// Where the initial fetch sends the user instead of rendering the list
fn redirect_for(outcome: &TaskLoad) -> Option<&'static str> {
    match outcome {
        TaskLoad::LoginRequired => Some("/login"),
        TaskLoad::Loaded(_) | TaskLoad::Failed(_) => None,
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let (draft, set_draft) = signal(TaskDraft::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    // Fetch once on mount
    Effect::new(move |_| {
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = tasks::load_tasks(&api).await;
            if let Some(target) = redirect_for(&outcome) {
                web_sys::console::log_1(&"[TASKS] Session invalid, redirecting to login".into());
                navigate(target, Default::default());
                return;
            }
            match outcome {
                TaskLoad::Loaded(loaded) => {
                    web_sys::console::log_1(&format!("[TASKS] Loaded {} tasks", loaded.len()).into());
                    store_set_tasks(&store, loaded);
                }
                TaskLoad::Failed(message) => set_error.set(message),
                TaskLoad::LoginRequired => {}
            }
        });
    });

    let on_add = Callback::new(move |_: ()| {
        let current = draft.get_untracked();
        if !current.is_submittable() {
            return;
        }
        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match tasks::add_task(&api, &current).await {
                Ok(Some(created)) => {
                    store_notify(&store, created.message);
                    store_add_task(&store, created.task);
                    set_draft.update(|d| d.clear());
                }
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::warn_1(&format!("[TASKS] Create failed: {}", e).into());
                    set_error.set(e.user_message(CREATE_FAILED));
                }
            }
            set_loading.set(false);
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_task(id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(e) => {
                    web_sys::console::warn_1(&format!("[TASKS] Delete {} failed: {}", id, e).into());
                    set_error.set(e.user_message(DELETE_FAILED));
                }
            }
        });
    });

    view! {
        <div class="tasks-page">
            <h1 class="page-title">"Your Tasks"</h1>

            <ErrorBanner message=error />

            <NewTaskForm draft=draft set_draft=set_draft loading=loading on_submit=on_add />

            <Show
                when=move || !store.task_list().read().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <h3>"No tasks"</h3>
                        <p>"Get started by creating a new task."</p>
                    </div>
                }
            >
                <div class="task-list">
                    <For
                        each=move || store.task_list().read().tasks().to_vec()
                        key=|task| task.id
                        children=move |task| view! { <TaskItem task=task on_delete=on_delete /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_fetch_redirects_to_login() {
        assert_eq!(redirect_for(&TaskLoad::LoginRequired), Some("/login"));
    }

    #[test]
    fn test_failed_fetch_stays_and_shows_error() {
        assert_eq!(redirect_for(&TaskLoad::Failed("Failed to fetch tasks".to_string())), None);
        assert_eq!(redirect_for(&TaskLoad::Loaded(vec![])), None);
    }
}
