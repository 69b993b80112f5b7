//! Board View Store
//!
//! Reactive mirror of the controller's [`BoardView`], using
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::view::{BoardView, BoardViewStoreFields};

/// Type alias for the store
pub type BoardStore = Store<BoardView>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

/// Copy a published view into the store.
///
/// Fields are written separately so the mode subtree is only rebuilt when the
/// mode actually changes, not on every list refresh.
pub fn store_apply_view(store: &BoardStore, view: &BoardView) {
    if store.mode().get_untracked() != view.mode {
        *store.mode().write() = view.mode.clone();
    }
    if store.list().get_untracked() != view.list {
        *store.list().write() = view.list.clone();
    }
}
