use leptos::prelude::*;
use task_api::Task;

/// A single task row with its delete button
#[component]
pub fn TaskItem(task: Task, #[prop(into)] on_delete: Callback<i64>) -> impl IntoView {
    let id = task.id;

    view! {
        <div class="task-row">
            <div class="task-body">
                <h3 class="task-title">{task.title}</h3>
                <p class="task-description">{task.description}</p>
            </div>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
        </div>
    }
}
