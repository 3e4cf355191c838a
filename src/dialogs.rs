use crate::services::Dialogs;

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or(false),
            None => false,
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert() failed: {:?}", e);
            }
        }
    }
}
