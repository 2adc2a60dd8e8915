//! Marketing landing page.

use contracts::redirect::{LOGIN, OFFER_LISTING};
use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let landing = move || session.with(|s| s.identity.as_ref().map(contracts::redirect::landing_path));

    view! {
        <section class="home-hero">
            <h1>"Find your next job, or your next hire"</h1>
            <p class="home-hero__lead">
                "Browse open positions, apply in one click and follow your applications. Companies publish offers and track candidates in one place."
            </p>
            <div class="home-hero__actions">
                <a class="btn btn--primary" href=OFFER_LISTING>
                    "Browse offers"
                </a>
                {move || match landing() {
                    Some(path) => view! { <a class="btn" href=path>"Go to my dashboard"</a> }.into_any(),
                    None => view! { <a class="btn" href=LOGIN>"Sign in"</a> }.into_any(),
                }}
            </div>
        </section>
        <section class="home-features">
            <article>
                <h2>"For candidates"</h2>
                <p>"Complete your profile once and apply to any offer."</p>
            </article>
            <article>
                <h2>"For companies"</h2>
                <p>"Publish offers, review applicants and manage your team."</p>
            </article>
        </section>
    }
}
