//! Public offer listing with infinite scroll.

use contracts::catalog::{DEFAULT_PAGE_SIZE, Offer};
use leptos::prelude::*;

use crate::components::infinite_scroll::InfiniteScrollSentinel;
use crate::components::offer_card::OfferCard;
use crate::net::api;
use crate::pages::paged::next_page_loader;
use crate::state::listing::Listing;
use crate::state::session::SessionState;

#[component]
pub fn OffersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let listing = RwSignal::new(Listing::<Offer>::default());
    let load_next = next_page_loader(listing, session, |page| api::list_offers(page, DEFAULT_PAGE_SIZE));

    // First page on mount; later pages come from the sentinel.
    Effect::new(move || load_next.run(()));

    let can_load = Signal::derive(move || listing.with(Listing::wants_more));

    view! {
        <section class="offers-page">
            <h1>"Open positions"</h1>
            <Show when=move || listing.with(Listing::is_initial_load)>
                <p class="page-status">"Loading offers..."</p>
            </Show>
            <Show when=move || listing.with(Listing::is_empty)>
                <p class="page-status">"No offers published yet."</p>
            </Show>
            <div class="offers-page__grid">
                <For each=move || listing.with(|l| l.items.clone()) key=|offer| offer.id.clone() let:offer>
                    <OfferCard offer=offer />
                </For>
            </div>
            <Show when=move || listing.with(|l| l.error.is_some())>
                <p class="page-status page-status--error">
                    {move || listing.with(|l| l.error.clone().unwrap_or_default())}
                    <button class="btn" on:click=move |_| load_next.run(())>
                        "Retry"
                    </button>
                </p>
            </Show>
            <Show when=move || listing.with(|l| l.loading_more && l.page > 0)>
                <p class="page-status">"Loading more..."</p>
            </Show>
            <InfiniteScrollSentinel on_visible=load_next enabled=can_load />
        </section>
    }
}
