//! Application Context
//!
//! Shared handle to the board controller, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::board::TaskBoard;

/// Copyable handle to the one [`TaskBoard`]
#[derive(Clone, Copy)]
pub struct BoardContext {
    board: StoredValue<Rc<TaskBoard>, LocalStorage>,
}

impl BoardContext {
    pub fn new(board: Rc<TaskBoard>) -> Self {
        Self {
            board: StoredValue::new_local(board),
        }
    }

    /// Owned handle for use inside `spawn_local`
    pub fn board(&self) -> Rc<TaskBoard> {
        self.board.get_value()
    }
}

pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
