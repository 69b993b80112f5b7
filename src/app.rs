//! Task Board App
//!
//! Wires the controller to its browser collaborators and switches between
//! the username prompt and the task list.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiClient, FetchTransport};
use crate::board::TaskBoard;
use crate::components::{IdentityPrompt, NewTaskForm, TaskList, UserBar};
use crate::config::ClientConfig;
use crate::context::BoardContext;
use crate::dialog::{AlertNotifier, BrowserConfirm};
use crate::session::BrowserSession;
use crate::store::{store_apply_view, BoardStore};
use crate::view::{BoardView, BoardViewStoreFields, Mode};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store: BoardStore = Store::new(BoardView::default());
    provide_context(store);

    let api = ApiClient::new(
        &config.api_base,
        Rc::new(FetchTransport),
        Rc::new(AlertNotifier),
    );
    let board = Rc::new(TaskBoard::new(
        Rc::new(BrowserSession::new(config.session_key.clone())),
        api,
        Rc::new(BrowserConfirm),
    ));
    board.subscribe(move |view| store_apply_view(&store, view));
    provide_context(BoardContext::new(board.clone()));

    log::info!("[APP] Starting against {}", config.api_base);
    spawn_local(async move {
        board.resolve_mode().await;
    });

    view! {
        <main class="container">
            <h1>"Tasks"</h1>
            {move || match store.mode().get() {
                Mode::Prompt => view! { <IdentityPrompt /> }.into_any(),
                Mode::List { identity } => view! {
                    <section id="tasks-display">
                        <UserBar identity=identity />
                        <NewTaskForm />
                        <TaskList />
                    </section>
                }
                .into_any(),
            }}
        </main>
    }
}
