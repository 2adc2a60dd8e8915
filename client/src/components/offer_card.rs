//! Card for one job offer in listings and the company dashboard.

#[cfg(test)]
#[path = "offer_card_test.rs"]
mod offer_card_test;

use contracts::catalog::Offer;
use leptos::prelude::*;

/// One-line summary under the title: company, location and modality.
#[must_use]
pub fn offer_meta_line(offer: &Offer) -> String {
    [
        offer.company_name.as_deref(),
        offer.location.as_deref(),
        Some(offer.modality.label()),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" · ")
}

/// Truncate the description for card previews.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_owned();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

const EXCERPT_CHARS: usize = 160;

#[component]
pub fn OfferCard(offer: Offer, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let href = format!("/offers/{}", urlencoding::encode(&offer.id));
    let meta = offer_meta_line(&offer);
    let summary = excerpt(&offer.description, EXCERPT_CHARS);
    let salary = offer.salary.clone();
    let inactive = !offer.active;

    view! {
        <article class="offer-card" class:offer-card--inactive=inactive>
            <a class="offer-card__title" href=href>
                {offer.title}
            </a>
            <p class="offer-card__meta">{meta}</p>
            <p class="offer-card__summary">{summary}</p>
            {salary.map(|s| view! { <p class="offer-card__salary">{s}</p> })}
            {children.map(|c| view! { <div class="offer-card__actions">{c()}</div> })}
        </article>
    }
}
