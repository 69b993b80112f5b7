//! User Dialogs
//!
//! Notification and confirmation seams, with blocking browser implementations.

/// Sink for user-facing error messages
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Asks the user a yes/no question
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// `window.alert`
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("[DIALOG] no window, dropping alert: {}", message);
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("[DIALOG] alert failed: {:?}", err);
        }
    }
}

/// `window.confirm`. Any failure to show the dialog counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserConfirm;

impl Confirmer for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
