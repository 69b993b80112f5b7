//! New Task Form Component
//!
//! Form for creating a task for the current user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_board();
    let (title, set_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        let board = ctx.board();
        spawn_local(async move {
            board.create_task(&text).await;
            set_title.set(String::new());
        });
    };

    view! {
        <form id="new-task-form" class="new-task-form" on:submit=create_task>
            <input
                id="task-title"
                type="text"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
