//! Board View Model
//!
//! Plain data describing what the page shows. [`render`] builds the list
//! area from server records without touching the DOM.

use reactive_stores::Store;

use crate::models::{Task, TaskId, TaskState};

pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Create one!";
pub const LOAD_FAILED: &str = "Failed to load tasks.";

/// Which of the two screens is visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Asking for a username
    #[default]
    Prompt,
    /// Showing the tasks of `identity`
    List { identity: String },
}

/// One rendered task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub state: TaskState,
    pub checked: bool,
    /// Creation time for the row tooltip
    pub created: Option<String>,
}

impl TaskRow {
    pub fn state_class(&self) -> &'static str {
        self.state.as_str()
    }
}

/// Contents of the list area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListArea {
    /// Nothing fetched yet
    #[default]
    Pending,
    Empty,
    Rows(Vec<TaskRow>),
    Error(String),
}

impl ListArea {
    pub fn rows(&self) -> &[TaskRow] {
        match self {
            ListArea::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Flip a row's checkbox ahead of the server. Returns false if the row is gone.
    pub fn set_checked(&mut self, id: TaskId, checked: bool) -> bool {
        match self {
            ListArea::Rows(rows) => rows
                .iter_mut()
                .find(|row| row.id == id)
                .map(|row| row.checked = checked)
                .is_some(),
            _ => false,
        }
    }
}

/// Everything the page renders, with field-level reactivity
#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct BoardView {
    pub mode: Mode,
    pub list: ListArea,
}

/// Rebuild the list area from scratch, keeping server order
pub fn render(records: &[Task]) -> ListArea {
    if records.is_empty() {
        return ListArea::Empty;
    }
    ListArea::Rows(
        records
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                title: task.title.clone(),
                state: task.state,
                checked: task.state.is_done(),
                created: task
                    .created_at
                    .map(|ts| format!("Created {}", ts.format("%Y-%m-%d %H:%M"))),
            })
            .collect(),
    )
}
