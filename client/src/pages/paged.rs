//! Page-fetch driver shared by the infinite-scroll screens.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use contracts::{ApiFailure, Page};
use leptos::prelude::*;

use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::util::auth::handle_failure;

/// Callback that fetches the next page into `listing`.
///
/// Replies that land after the owning page was torn down are ignored.
pub fn next_page_loader<T, F, Fut>(
    listing: RwSignal<Listing<T>>,
    session: RwSignal<SessionState>,
    fetch: F,
) -> Callback<()>
where
    T: Send + Sync + 'static,
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Page<T>, ApiFailure>> + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));
    let alive_on_cleanup = alive.clone();
    on_cleanup(move || alive_on_cleanup.store(false, Ordering::Relaxed));

    Callback::new(move |()| {
        let Some(page) = listing.try_update(Listing::begin_next).flatten() else {
            return;
        };
        let request = fetch(page);
        let alive = alive.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = request.await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            listing.update(|l| match result {
                Ok(page) => l.finish(page),
                Err(failure) => l.fail(handle_failure(session, &failure)),
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, alive, session, handle_failure);
        }
    })
}
