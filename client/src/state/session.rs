//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>`. Filled when a login
//! resolves, hydrated from the readable `user_info` cookie (or `/api/auth/me`)
//! after a reload, and cleared on logout. Route guards wait for `loaded`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use contracts::auth::Identity;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// Bearer token mirrored from the resolved login; absent after a reload
    /// because the cookie carrying it is http-only.
    pub token: Option<String>,
    /// `true` once hydration finished, whether or not a user was found.
    pub loaded: bool,
}

impl SessionState {
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Store a freshly resolved identity.
    pub fn resolve(&mut self, identity: Identity, token: String) {
        self.identity = Some(identity);
        self.token = Some(token);
        self.loaded = true;
    }

    /// Hydration fallback: only fills an empty store.
    pub fn hydrate(&mut self, identity: Option<Identity>) {
        if self.identity.is_none() {
            self.identity = identity;
        }
        self.loaded = true;
    }

    pub fn clear(&mut self) {
        self.identity = None;
        self.token = None;
        self.loaded = true;
    }

    pub fn mark_profile_complete(&mut self) {
        if let Some(identity) = self.identity.as_mut() {
            identity.profile_complete = true;
        }
    }
}
