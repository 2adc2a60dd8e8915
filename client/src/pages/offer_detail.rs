//! Offer detail with the candidate "apply" action.

#[cfg(test)]
#[path = "offer_detail_test.rs"]
mod offer_detail_test;

use contracts::auth::Identity;
use contracts::catalog::Offer;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::offer_card::offer_meta_line;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::auth::handle_failure;

/// What the apply area shows for the current viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyControl {
    SignInFirst,
    Apply,
    Applied,
    /// Organization and admin accounts cannot apply.
    Hidden,
}

#[must_use]
pub fn apply_control(identity: Option<&Identity>, offer_active: bool, applied: bool) -> ApplyControl {
    match identity {
        _ if !offer_active => ApplyControl::Hidden,
        None => ApplyControl::SignInFirst,
        Some(user) if user.role.is_org_scoped() || user.role.is_admin() => ApplyControl::Hidden,
        Some(_) if applied => ApplyControl::Applied,
        Some(_) => ApplyControl::Apply,
    }
}

#[component]
pub fn OfferDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let offer_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let offer = RwSignal::new(None::<Offer>);
    let error = RwSignal::new(None::<String>);
    let applying = RwSignal::new(false);
    let applied = RwSignal::new(false);

    Effect::new(move || {
        let id = offer_id();
        offer.set(None);
        error.set(None);
        applied.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_offer(&id).await {
                Ok(found) => {
                    let _ = offer.try_set(Some(found));
                }
                Err(failure) => {
                    let _ = error.try_set(Some(failure.message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_apply = move |_| {
        if applying.get_untracked() {
            return;
        }
        applying.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::apply_to_offer(&offer_id()).await;
            let _ = applying.try_set(false);
            match result {
                Ok(()) => {
                    let _ = applied.try_set(true);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    };

    let on_sign_in = move |_| {
        crate::util::storage::store_redirect(&format!("/offers/{}", urlencoding::encode(&offer_id())));
    };

    let control = move || {
        let active = offer.with(|o| o.as_ref().is_some_and(|o| o.active));
        session.with(|s| apply_control(s.identity.as_ref(), active, applied.get()))
    };

    view! {
        <section class="offer-detail">
            <Show when=move || error.get().is_some()>
                <p class="page-status page-status--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || match offer.get() {
                None => view! { <p class="page-status">"Loading offer..."</p> }.into_any(),
                Some(found) => {
                    let meta = offer_meta_line(&found);
                    view! {
                        <article class="offer-detail__body">
                            <h1>{found.title}</h1>
                            <p class="offer-detail__meta">{meta}</p>
                            {found.salary.map(|s| view! { <p class="offer-detail__salary">{s}</p> })}
                            <p class="offer-detail__description">{found.description}</p>
                        </article>
                    }
                        .into_any()
                }
            }}
            <div class="offer-detail__actions">
                {move || match control() {
                    ApplyControl::Hidden => ().into_any(),
                    ApplyControl::SignInFirst => {
                        view! {
                            <a class="btn" href="/login" on:click=on_sign_in>
                                "Sign in to apply"
                            </a>
                        }
                            .into_any()
                    }
                    ApplyControl::Applied => {
                        view! { <p class="offer-detail__applied">"Application sent."</p> }.into_any()
                    }
                    ApplyControl::Apply => {
                        view! {
                            <button class="btn btn--primary" on:click=on_apply disabled=move || applying.get()>
                                {move || if applying.get() { "Sending..." } else { "Apply" }}
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
