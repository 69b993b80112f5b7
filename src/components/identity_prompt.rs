//! Identity Prompt Component
//!
//! Asks for a username before any tasks are shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;

/// Username form. Mounted fresh on every return to prompt mode, so the
/// input always starts empty.
#[component]
pub fn IdentityPrompt() -> impl IntoView {
    let ctx = use_board();
    let (name, set_name) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = name.get();
        if value.trim().is_empty() {
            return;
        }
        let board = ctx.board();
        spawn_local(async move {
            board.set_identity(&value).await;
        });
    };

    view! {
        <section id="username-prompt">
            <h2>"Who are you?"</h2>
            <form id="username-form" on:submit=submit>
                <input
                    id="username-input"
                    type="text"
                    placeholder="Enter your username"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit">"Continue"</button>
            </form>
        </section>
    }
}
