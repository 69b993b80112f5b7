//! User Bar Component
//!
//! Current username with a button to switch user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;

#[component]
pub fn UserBar(identity: String) -> impl IntoView {
    let ctx = use_board();

    let change_user = move |_| {
        let board = ctx.board();
        spawn_local(async move {
            board.clear_identity().await;
        });
    };

    view! {
        <div class="user-bar">
            <span>"Tasks for "</span>
            <strong id="current-username">{identity}</strong>
            <button id="change-username" type="button" on:click=change_user>
                "Change user"
            </button>
        </div>
    }
}
