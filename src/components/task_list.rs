//! Task List Component
//!
//! Draws the list area. Every new list replaces the previous rows outright.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::use_board_store;
use crate::view::{BoardViewStoreFields, ListArea, EMPTY_PLACEHOLDER};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div id="tasks-container" class="task-list">
            {move || match store.list().get() {
                ListArea::Pending => ().into_any(),
                ListArea::Empty => view! { <p class="empty">{EMPTY_PLACEHOLDER}</p> }.into_any(),
                ListArea::Error(message) => view! { <p class="error">{message}</p> }.into_any(),
                ListArea::Rows(rows) => view! {
                    <ul>
                        {rows
                            .into_iter()
                            .map(|row| view! { <TaskItem row=row /> })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
