//! Task Item Component
//!
//! One task row: checkbox, inline-editable title, delete button.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;
use crate::view::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_board();

    let id = row.id;
    let state = row.state;
    let title = StoredValue::new(row.title.clone());
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    // Focus the edit box once it is mounted
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Enter and blur both land here; only the first one per edit counts
    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let value = draft.get_untracked();
        let board = ctx.board();
        spawn_local(async move {
            board.rename_task(id, &value).await;
        });
    };

    let start_edit = move |_: web_sys::MouseEvent| {
        set_draft.set(title.get_value());
        set_editing.set(true);
    };

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let board = ctx.board();
        spawn_local(async move {
            board.toggle_task(id, state).await;
        });
    };

    let delete = move |_: web_sys::MouseEvent| {
        let board = ctx.board();
        spawn_local(async move {
            board.delete_task(id).await;
        });
    };

    view! {
        <li
            class=row.state_class()
            data-id=id.to_string()
            data-state=state.as_str()
            title=row.created.clone()
        >
            <div class="task-checkbox">
                <input
                    type="checkbox"
                    class="toggle-checkbox"
                    prop:checked=row.checked
                    on:click=toggle
                />
            </div>

            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        class="task-title-edit"
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit();
                            }
                        }
                        on:blur=move |_| commit()
                    />
                }
                .into_any()
            } else {
                view! {
                    <span class="task-title" on:dblclick=start_edit>
                        {title.get_value()}
                    </span>
                }
                .into_any()
            }}

            <div class="task-actions">
                <button class="delete-btn" type="button" on:click=delete>"×"</button>
            </div>
        </li>
    }
}
