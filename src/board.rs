//! Task Board Controller
//!
//! Keeps the page in one of two modes (username prompt or task list) and
//! re-syncs the task list with the server after every change.
//!
//! The controller owns the current [`BoardView`] and pushes a copy to its
//! subscriber whenever it changes. Refreshes are numbered when issued; a
//! response is only applied if no newer refresh has been applied already.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::{self, ApiClient, CreateTaskArgs};
use crate::dialog::Confirmer;
use crate::models::{TaskId, TaskState};
use crate::session::SessionContext;
use crate::view::{render, BoardView, ListArea, Mode, LOAD_FAILED};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

type Listener = Rc<dyn Fn(&BoardView)>;

pub struct TaskBoard {
    session: Rc<dyn SessionContext>,
    api: ApiClient,
    confirmer: Rc<dyn Confirmer>,
    view: RefCell<BoardView>,
    listener: RefCell<Option<Listener>>,
    /// Sequence number of the latest refresh issued
    issued: Cell<u64>,
    /// Sequence number of the latest refresh applied (or invalidated)
    applied: Cell<u64>,
}

impl TaskBoard {
    pub fn new(
        session: Rc<dyn SessionContext>,
        api: ApiClient,
        confirmer: Rc<dyn Confirmer>,
    ) -> Self {
        Self {
            session,
            api,
            confirmer,
            view: RefCell::new(BoardView::default()),
            listener: RefCell::new(None),
            issued: Cell::new(0),
            applied: Cell::new(0),
        }
    }

    /// Receive every published view. Replaces any earlier subscriber.
    pub fn subscribe(&self, listener: impl Fn(&BoardView) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn view(&self) -> BoardView {
        self.view.borrow().clone()
    }

    fn publish(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            let view = self.view();
            listener(&view);
        }
    }

    // ========================
    // Identity
    // ========================

    /// Pick the mode from the stored identity. List mode also refreshes.
    pub async fn resolve_mode(&self) {
        // Anything still in flight belongs to the previous mode
        self.applied.set(self.issued.get());

        match self.session.get() {
            Some(identity) => {
                log::info!("[BOARD] Showing tasks for {}", identity);
                {
                    let mut view = self.view.borrow_mut();
                    view.mode = Mode::List { identity };
                    view.list = ListArea::Pending;
                }
                self.publish();
                self.refresh().await;
            }
            None => {
                log::info!("[BOARD] No identity, prompting");
                *self.view.borrow_mut() = BoardView::default();
                self.publish();
            }
        }
    }

    /// Store a new identity. Blank input is ignored and returns false.
    pub async fn set_identity(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.session.set(name);
        self.resolve_mode().await;
        true
    }

    /// Forget the identity and go back to the prompt
    pub async fn clear_identity(&self) {
        self.session.clear();
        self.resolve_mode().await;
    }

    // ========================
    // Sync
    // ========================

    /// Re-fetch the current user's tasks and rebuild the list
    pub async fn refresh(&self) {
        let Some(identity) = self.session.get() else {
            return;
        };
        let seq = self.issued.get() + 1;
        self.issued.set(seq);

        let list = match api::list_tasks(&self.api, &identity).await {
            Ok(tasks) => {
                log::debug!("[BOARD] Refresh #{} loaded {} tasks", seq, tasks.len());
                render(&tasks)
            }
            Err(err) => {
                log::error!(
                    "[BOARD] Failed to load tasks: status={:?} message={}",
                    err.status(),
                    err.message()
                );
                ListArea::Error(LOAD_FAILED.to_string())
            }
        };

        if seq <= self.applied.get() {
            log::debug!(
                "[BOARD] Dropping stale refresh #{} (already at #{})",
                seq,
                self.applied.get()
            );
            return;
        }
        self.applied.set(seq);
        self.view.borrow_mut().list = list;
        self.publish();
    }

    // ========================
    // Task Mutations
    // ========================

    /// Create a task for the current user, then refresh whatever the outcome
    pub async fn create_task(&self, title: &str) -> bool {
        let title = title.trim();
        let Some(username) = self.session.get() else {
            return false;
        };
        if title.is_empty() {
            return false;
        }

        let args = CreateTaskArgs {
            title,
            username: &username,
            state: TaskState::Todo,
        };
        let _ = api::create_task(&self.api, &args).await;
        self.refresh().await;
        true
    }

    /// Flip between todo and done. The checkbox moves immediately; the
    /// following refresh overwrites it with what the server has.
    pub async fn toggle_task(&self, id: TaskId, current: TaskState) {
        let next = current.toggled();
        let moved = self.view.borrow_mut().list.set_checked(id, next.is_done());
        if moved {
            self.publish();
        }

        let _ = api::update_task_state(&self.api, id, next).await;
        self.refresh().await;
    }

    /// Rename a task. A blank title only refreshes, reverting the edit.
    pub async fn rename_task(&self, id: TaskId, new_title: &str) {
        if !new_title.trim().is_empty() {
            let _ = api::update_task_title(&self.api, id, new_title).await;
        }
        self.refresh().await;
    }

    /// Delete after confirmation. Returns false if the user declined.
    pub async fn delete_task(&self, id: TaskId) -> bool {
        if !self.confirmer.confirm(DELETE_PROMPT) {
            log::debug!("[BOARD] Delete of #{} declined", id);
            return false;
        }
        let _ = api::delete_task(&self.api, id).await;
        self.refresh().await;
        true
    }
}
