//! Per-tab session flags. The "login" here is a client-only flag set by the
//! sign-in page; it gates nothing but UI navigation.

use web_sys::window;

use crate::config;

pub fn is_logged_in() -> bool {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(flag)) = storage.get_item(config::LOGGED_IN_KEY) {
                return flag == "true";
            }
        }
    }
    false
}

/// Email remembered by the sign-in page. Absence is an empty string, not an
/// error.
pub fn stored_email() -> String {
    window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::USER_EMAIL_KEY).ok())
        .flatten()
        .unwrap_or_default()
}

pub fn store_login(email: &str) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.set_item(config::LOGGED_IN_KEY, "true");
            let _ = storage.set_item(config::USER_EMAIL_KEY, email);
        }
    }
}

pub fn clear_login() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.session_storage() {
            let _ = storage.remove_item(config::LOGGED_IN_KEY);
            let _ = storage.remove_item(config::USER_EMAIL_KEY);
        }
    }
}
