//! Candidate profile completion form.

#[cfg(test)]
#[path = "profile_complete_test.rs"]
mod profile_complete_test;

use contracts::catalog::{ProfileDraft, parse_skills};
use contracts::redirect::OFFER_LISTING;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::SessionState;
use crate::util::auth::{Access, handle_failure, install_route_guard};

/// Form fields; skills are typed as one comma-separated line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub headline: String,
    pub summary: String,
    pub phone: String,
    pub skills: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_draft(draft: ProfileDraft) -> Self {
        Self { headline: draft.headline, summary: draft.summary, phone: draft.phone, skills: draft.skills.join(", ") }
    }

    #[must_use]
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            headline: self.headline.trim().to_owned(),
            summary: self.summary.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            skills: parse_skills(&self.skills),
        }
    }
}

#[component]
pub fn ProfileCompletePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_route_guard(session, Access::Candidate, navigate.clone());

    let form = RwSignal::new(ProfileForm::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);

    // Prefill from the stored profile once a candidate session is known.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        let allowed = session.with(|s| s.identity.as_ref().is_some_and(|i| Access::Candidate.allows(i)));
        if !allowed || prefilled.get_untracked() {
            return;
        }
        prefilled.set(true);
        spawn_local(async move {
            match api::my_profile().await {
                Ok(profile) => {
                    let _ = form.try_set(ProfileForm::from_draft(ProfileDraft::from_profile(&profile)));
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    // Leave for the offer listing once the profile is stored.
    Effect::new(move || {
        if saved.get() {
            navigate(OFFER_LISTING, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = form.with_untracked(ProfileForm::to_draft);
        if let Err(e) = draft.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::update_profile(&draft).await;
            let _ = saving.try_set(false);
            match result {
                Ok(_) => {
                    session.update(SessionState::mark_profile_complete);
                    let _ = saved.try_set(true);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    };

    view! {
        <section class="profile-page">
            <h1>"Complete your profile"</h1>
            <p class="profile-page__lead">"Companies see this when you apply."</p>
            <form class="profile-form" on:submit=on_submit>
                <input
                    class="form-input"
                    placeholder="Headline, e.g. Backend developer"
                    prop:value=move || form.with(|f| f.headline.clone())
                    on:input=move |ev| form.update(|f| f.headline = event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Short summary of your experience"
                    prop:value=move || form.with(|f| f.summary.clone())
                    on:input=move |ev| form.update(|f| f.summary = event_target_value(&ev))
                ></textarea>
                <input
                    class="form-input"
                    type="tel"
                    placeholder="Phone"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    placeholder="Skills, separated by commas"
                    prop:value=move || form.with(|f| f.skills.clone())
                    on:input=move |ev| form.update(|f| f.skills = event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="page-status page-status--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </section>
    }
}
