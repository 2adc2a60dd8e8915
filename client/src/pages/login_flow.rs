//! Glue between the login screens and the shared [`LoginFlow`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential, role and company screens each produce one `LoginRequest`
//! through a flow transition, then hand it to [`send_login_step`]. The reply
//! is applied to the flow, pending storage is synced and the browser moves to
//! whichever screen the new state lives on, or to the landing page once the
//! login resolves.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use contracts::auth::{Identity, LoginRequest};
use contracts::flow::{LoginFlow, PendingLogin, Stage};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::storage;

/// What the current screen should do after a reply was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Next {
    Stay,
    Screen(Stage),
    Resolved { identity: Identity, token: String },
}

#[must_use]
pub fn next_step(flow: &mut LoginFlow, current: Stage) -> Next {
    if let Some((identity, token)) = flow.take_resolved() {
        return Next::Resolved { identity, token };
    }
    match flow.stage() {
        Some(stage) if stage != current => Next::Screen(stage),
        _ => Next::Stay,
    }
}

/// Entry check for the role and company screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Ready,
    /// Page reload: rebuild the flow from stored pending data.
    Resume(LoginFlow),
    /// Nothing to disambiguate; go back to the credential screen.
    Leave,
}

#[must_use]
pub fn entry_for(flow: &LoginFlow, stored: Option<PendingLogin>, wanted: Stage) -> Entry {
    if flow.stage() == Some(wanted) {
        return Entry::Ready;
    }
    if flow.submitting() {
        return Entry::Leave;
    }
    let resumed = LoginFlow::resume(stored);
    if resumed.stage() == Some(wanted) { Entry::Resume(resumed) } else { Entry::Leave }
}

/// Run [`entry_for`] once on mount and leave for `/login` if needed.
pub fn ensure_entry<F>(flow: RwSignal<LoginFlow>, wanted: Stage, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || match flow.with_untracked(|f| entry_for(f, storage::load_pending(), wanted)) {
        Entry::Ready => {}
        Entry::Resume(resumed) => flow.set(resumed),
        Entry::Leave => navigate(Stage::Credentials.path(), NavigateOptions { replace: true, ..NavigateOptions::default() }),
    });
}

/// Send one login request and move the UI along with the reply.
///
/// A reply that arrives after the flow was abandoned is dropped.
pub fn send_login_step<F>(
    flow: RwSignal<LoginFlow>,
    session: RwSignal<SessionState>,
    request: LoginRequest,
    current: Stage,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let reply = crate::net::api::login(&request).await;
        let Some(next) = flow.try_update(|f| {
            f.apply(reply).ok()?;
            let next = next_step(f, current);
            storage::sync_pending(f.pending());
            Some(next)
        }) else {
            return;
        };
        let Some(next) = next else {
            leptos::logging::log!("login reply dropped: flow no longer waiting");
            return;
        };
        match next {
            Next::Stay => {}
            Next::Screen(stage) => navigate(stage.path(), NavigateOptions::default()),
            Next::Resolved { identity, token } => {
                storage::clear_pending();
                let target = contracts::redirect::destination(&identity, storage::take_redirect().as_deref());
                session.update(|s| s.resolve(identity, token));
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flow, session, request, current, navigate);
    }
}
