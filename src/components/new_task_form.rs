//! New Task Form Component
//!
//! Title and description inputs for creating a task.

use leptos::prelude::*;
use task_api::TaskDraft;

/// Form for creating new tasks; the draft lives in the parent page
#[component]
pub fn NewTaskForm(
    draft: ReadSignal<TaskDraft>,
    set_draft: WriteSignal<TaskDraft>,
    loading: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="new-task-card">
            <h2>"Add New Task"</h2>
            <form class="new-task-form" on:submit=submit>
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    required
                    placeholder="Enter task title"
                    prop:value=move || draft.get().title
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        set_draft.update(|d| d.title = title);
                    }
                />

                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    placeholder="Enter task description"
                    prop:value=move || draft.get().description
                    on:input:target=move |ev| {
                        let description = ev.target().value();
                        set_draft.update(|d| d.description = description);
                    }
                ></textarea>

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Adding..." } else { "Add Task" }}
                </button>
            </form>
        </div>
    }
}
