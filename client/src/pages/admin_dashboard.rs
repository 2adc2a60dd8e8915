//! Admin dashboard: paginated candidate listing.

use contracts::catalog::{CandidateProfile, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::infinite_scroll::InfiniteScrollSentinel;
use crate::net::api;
use crate::pages::paged::next_page_loader;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::util::auth::{Access, install_route_guard};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_route_guard(session, Access::Admin, use_navigate());

    let listing = RwSignal::new(Listing::<CandidateProfile>::default());
    let load_next = next_page_loader(listing, session, |page| api::candidates(page, DEFAULT_PAGE_SIZE));

    // First page once an admin session is known.
    let started = RwSignal::new(false);
    Effect::new(move || {
        let allowed = session.with(|s| s.identity.as_ref().is_some_and(|i| Access::Admin.allows(i)));
        if allowed && !started.get_untracked() {
            started.set(true);
            load_next.run(());
        }
    });

    let can_load = Signal::derive(move || started.get() && listing.with(Listing::wants_more));

    view! {
        <section class="admin-dashboard">
            <h1>"Candidates"</h1>
            <Show when=move || listing.with(Listing::is_initial_load)>
                <p class="page-status">"Loading candidates..."</p>
            </Show>
            <Show when=move || listing.with(Listing::is_empty)>
                <p class="page-status">"No candidates registered yet."</p>
            </Show>
            <table class="admin-dashboard__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Headline"</th>
                        <th>"Skills"</th>
                        <th>"Profile"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || listing.with(|l| l.items.clone()) key=|c| c.id.clone() let:candidate>
                        <tr>
                            <td>{candidate.name.clone()}</td>
                            <td>{candidate.email.clone().unwrap_or_default()}</td>
                            <td>{candidate.headline.clone().unwrap_or_default()}</td>
                            <td>{candidate.skills.join(", ")}</td>
                            <td>{if candidate.profile_complete { "Complete" } else { "Incomplete" }}</td>
                        </tr>
                    </For>
                </tbody>
            </table>
            <Show when=move || listing.with(|l| l.error.is_some())>
                <p class="page-status page-status--error">
                    {move || listing.with(|l| l.error.clone().unwrap_or_default())}
                    <button class="btn" on:click=move |_| load_next.run(())>
                        "Retry"
                    </button>
                </p>
            </Show>
            <InfiniteScrollSentinel on_visible=load_next enabled=can_load />
        </section>
    }
}
