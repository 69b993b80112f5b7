//! Session Context
//!
//! Holds the identity (username) for the lifetime of a browser tab.

use web_sys::Storage;

/// Get/set/clear access to the current identity
pub trait SessionContext {
    /// Stored identity. An empty stored value counts as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, identity: &str);
    fn clear(&self);
}

/// Identity kept in `window.sessionStorage` under one key
#[derive(Debug, Clone)]
pub struct BrowserSession {
    key: String,
}

impl BrowserSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window()?.session_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("[SESSION] sessionStorage unavailable: {:?}", err);
                None
            }
        }
    }
}

impl SessionContext for BrowserSession {
    fn get(&self) -> Option<String> {
        self.storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|identity| !identity.is_empty())
    }

    fn set(&self, identity: &str) {
        if let Some(storage) = self.storage() {
            if let Err(err) = storage.set_item(&self.key, identity) {
                log::warn!("[SESSION] failed to store identity: {:?}", err);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            if let Err(err) = storage.remove_item(&self.key) {
                log::warn!("[SESSION] failed to clear identity: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
pub use memory::MemorySession;
