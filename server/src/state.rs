//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no session table of its own: the remote API owns every
//! record, so state is just the remote transport plus parsed config.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::remote::RemoteApi;

#[derive(Clone)]
pub struct AppState {
    pub remote: Arc<dyn RemoteApi>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(remote: Arc<dyn RemoteApi>, config: AppConfig) -> Self {
        Self { remote, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::{DEFAULT_PORT, RemoteTimeouts};
    use crate::remote::test_helpers::ScriptedRemote;

    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            api_url: "http://remote.test".to_owned(),
            port: DEFAULT_PORT,
            cookie_secure: false,
            timeouts: RemoteTimeouts { request_secs: 1, connect_secs: 1 },
        }
    }

    /// App state backed by `remote`; keep the `Arc` to inspect recorded calls.
    #[must_use]
    pub fn test_app_state(remote: Arc<ScriptedRemote>) -> AppState {
        AppState::new(remote, test_config())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
