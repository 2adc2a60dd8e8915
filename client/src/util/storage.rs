//! Browser `localStorage` / `sessionStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so pages can
//! persist the remembered email, the in-progress login and the
//! redirect-after-login target without repeating web-sys glue. On the
//! server every read is `None` and every write is a no-op.

use contracts::cookies::{PENDING_LOGIN_KEY, REDIRECT_AFTER_LOGIN_KEY, REMEMBERED_EMAIL_KEY};
use contracts::flow::PendingLogin;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    /// Survives browser restarts.
    Local,
    /// Cleared when the tab closes.
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match area {
        Area::Local => window.local_storage().ok().flatten(),
        Area::Session => window.session_storage().ok().flatten(),
    }
}

pub fn load_string(area: Area, key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

pub fn save_string(area: Area, key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
    }
}

pub fn remove(area: Area, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
    }
}

/// Load a JSON value for `key`; malformed entries read as `None`.
pub fn load_json<T: DeserializeOwned>(area: Area, key: &str) -> Option<T> {
    serde_json::from_str(&load_string(area, key)?).ok()
}

pub fn save_json<T: Serialize>(area: Area, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        save_string(area, key, &raw);
    }
}

// =============================================================================
// NAMED ENTRIES
// =============================================================================

pub fn load_pending() -> Option<PendingLogin> {
    load_json(Area::Session, PENDING_LOGIN_KEY)
}

/// Persist the pending login, or drop it when the flow no longer has one.
pub fn sync_pending(pending: Option<&PendingLogin>) {
    match pending {
        Some(pending) => save_json(Area::Session, PENDING_LOGIN_KEY, pending),
        None => clear_pending(),
    }
}

pub fn clear_pending() {
    remove(Area::Session, PENDING_LOGIN_KEY);
}

pub fn remembered_email() -> Option<String> {
    load_string(Area::Local, REMEMBERED_EMAIL_KEY).filter(|e| !e.is_empty())
}

/// "Remember me": keep the email when checked, forget it otherwise.
pub fn remember_email(email: &str, remember: bool) {
    if remember {
        save_string(Area::Local, REMEMBERED_EMAIL_KEY, email.trim());
    } else {
        remove(Area::Local, REMEMBERED_EMAIL_KEY);
    }
}

pub fn store_redirect(path: &str) {
    save_string(Area::Session, REDIRECT_AFTER_LOGIN_KEY, path);
}

/// Read and clear the redirect-after-login target.
pub fn take_redirect() -> Option<String> {
    let target = load_string(Area::Session, REDIRECT_AFTER_LOGIN_KEY);
    remove(Area::Session, REDIRECT_AFTER_LOGIN_KEY);
    target
}
