//! UI Components
//!
//! Leptos components drawing the board view.

mod identity_prompt;
mod new_task_form;
mod task_item;
mod task_list;
mod user_bar;

pub use identity_prompt::IdentityPrompt;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use user_bar::UserBar;
