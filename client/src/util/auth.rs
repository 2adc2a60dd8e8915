//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical guard behavior: wait for the
//! session to load, send anonymous visitors to `/login` (remembering where
//! they were headed) and bounce signed-in users whose role does not own the
//! page to their own landing page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use contracts::auth::Identity;
use contracts::redirect::{LOGIN, landing_path};
use contracts::{ApiFailure, FailureKind};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;
use crate::util::{cookies, storage};

/// Which signed-in users may see a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Anyone,
    Organization,
    Admin,
    Candidate,
}

impl Access {
    #[must_use]
    pub fn allows(self, identity: &Identity) -> bool {
        match self {
            Self::Anyone => true,
            Self::Organization => identity.role.is_org_scoped(),
            Self::Admin => identity.role.is_admin(),
            Self::Candidate => !identity.role.is_org_scoped() && !identity.role.is_admin(),
        }
    }
}

/// Guard outcome for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardAction {
    /// Session still loading, or access granted.
    Stay,
    /// Anonymous: go to login and come back to `return_to`.
    Login { return_to: String },
    /// Wrong role: go to this user's landing page.
    Landing(&'static str),
}

#[must_use]
pub fn guard_action(session: &SessionState, access: Access, current_path: &str) -> GuardAction {
    if !session.loaded {
        return GuardAction::Stay;
    }
    match &session.identity {
        None => GuardAction::Login { return_to: current_path.to_owned() },
        Some(identity) if access.allows(identity) => GuardAction::Stay,
        Some(identity) => GuardAction::Landing(landing_path(identity)),
    }
}

/// Redirect away from the current page whenever [`guard_action`] says so.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, access: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        match guard_action(&session.get(), access, &path) {
            GuardAction::Stay => {}
            GuardAction::Login { return_to } => {
                storage::store_redirect(&return_to);
                navigate(LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            GuardAction::Landing(path) => {
                navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });
}

/// Drop every client-side trace of the session.
pub fn clear_local_session(session: RwSignal<SessionState>) {
    storage::clear_pending();
    cookies::clear_readable();
    session.update(SessionState::clear);
}

/// Message to show for a failed call; an expired session is cleared so the
/// route guard takes the user back to login.
pub fn handle_failure(session: RwSignal<SessionState>, failure: &ApiFailure) -> String {
    if failure.kind == FailureKind::Unauthorized {
        clear_local_session(session);
    }
    failure.message.clone()
}
