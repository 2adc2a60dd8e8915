//! Company dashboard: manage the active company's offers and their applicants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation follows the same loop: call the BFF, then bump `reload` so
//! the offer list is fetched again. Applicants are loaded per selected offer
//! and refreshed after each status change.

#[cfg(test)]
#[path = "company_dashboard_test.rs"]
mod company_dashboard_test;

use contracts::catalog::{Applicant, ApplicationStatus, Modality, Offer, OfferDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::offer_card::OfferCard;
use crate::net::api;
use crate::state::session::SessionState;
use crate::util::auth::{Access, handle_failure, install_route_guard};

/// Raw offer form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfferForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub modality: String,
    pub salary: String,
}

impl OfferForm {
    #[must_use]
    pub fn from_offer(offer: &Offer) -> Self {
        let draft = OfferDraft::from_offer(offer);
        Self {
            title: draft.title,
            description: draft.description,
            location: draft.location.unwrap_or_default(),
            modality: draft.modality.code().to_owned(),
            salary: draft.salary.unwrap_or_default(),
        }
    }

    /// Trimmed draft; blank optional fields are omitted.
    #[must_use]
    pub fn to_draft(&self) -> OfferDraft {
        let optional = |raw: &str| Some(raw.trim().to_owned()).filter(|s| !s.is_empty());
        OfferDraft {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            location: optional(&self.location),
            modality: Modality::from_code(&self.modality).unwrap_or_default(),
            salary: optional(&self.salary),
        }
    }
}

/// Which offer the form edits.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Editing {
    New,
    Existing(String),
}

#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_route_guard(session, Access::Organization, use_navigate());

    let offers = RwSignal::new(Vec::<Offer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u32);

    let editing = RwSignal::new(None::<Editing>);
    let form = RwSignal::new(OfferForm::default());
    let saving = RwSignal::new(false);

    let selected = RwSignal::new(None::<Offer>);
    let applicants = RwSignal::new(Vec::<Applicant>::new());
    let applicants_reload = RwSignal::new(0_u32);

    let allowed = move || session.with(|s| s.identity.as_ref().is_some_and(|i| Access::Organization.allows(i)));

    Effect::new(move || {
        reload.track();
        if !allowed() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            let result = api::company_offers().await;
            let _ = loading.try_set(false);
            match result {
                Ok(list) => {
                    let _ = offers.try_set(list);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    Effect::new(move || {
        applicants_reload.track();
        let Some(offer_id) = selected.with(|s| s.as_ref().map(|o| o.id.clone())) else {
            applicants.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::applicants(&offer_id).await {
                Ok(list) => {
                    let _ = applicants.try_set(list);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    let open_new = move |_| {
        form.set(OfferForm { modality: Modality::default().code().to_owned(), ..OfferForm::default() });
        editing.set(Some(Editing::New));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        let draft = form.with_untracked(OfferForm::to_draft);
        if let Err(e) = draft.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match &target {
                Editing::New => api::create_offer(&draft).await,
                Editing::Existing(id) => api::update_offer(id, &draft).await,
            };
            let _ = saving.try_set(false);
            match result {
                Ok(_) => {
                    let _ = editing.try_set(None);
                    let _ = reload.try_update(|n| *n += 1);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    };

    let edit_requested = RwSignal::new(None::<Offer>);
    Effect::new(move || {
        if let Some(offer) = edit_requested.get() {
            edit_requested.set(None);
            form.set(OfferForm::from_offer(&offer));
            editing.set(Some(Editing::Existing(offer.id)));
        }
    });

    let delete_requested = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(id) = delete_requested.get() else {
            return;
        };
        delete_requested.set(None);
        spawn_local(async move {
            match api::delete_offer(&id).await {
                Ok(()) => {
                    if selected.with_untracked(|s| s.as_ref().is_some_and(|o| o.id == id)) {
                        let _ = selected.try_set(None);
                    }
                    let _ = reload.try_update(|n| *n += 1);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    let status_change = RwSignal::new(None::<(String, ApplicationStatus)>);
    Effect::new(move || {
        let Some((application_id, status)) = status_change.get() else {
            return;
        };
        status_change.set(None);
        spawn_local(async move {
            match api::change_status(&application_id, status).await {
                Ok(()) => {
                    let _ = applicants_reload.try_update(|n| *n += 1);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    view! {
        <section class="company-dashboard">
            <header class="page-header">
                <h1>"Your offers"</h1>
                <button class="btn btn--primary" on:click=open_new>
                    "+ New offer"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="page-status page-status--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || editing.get().is_some()>
                <form class="offer-form" on:submit=on_save>
                    <h2>
                        {move || match editing.get() {
                            Some(Editing::Existing(_)) => "Edit offer",
                            _ => "New offer",
                        }}
                    </h2>
                    <input
                        class="form-input"
                        placeholder="Title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                    <textarea
                        class="form-input"
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                    <input
                        class="form-input"
                        placeholder="Location"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                    <select
                        class="form-input"
                        prop:value=move || form.with(|f| f.modality.clone())
                        on:change=move |ev| form.update(|f| f.modality = event_target_value(&ev))
                    >
                        {Modality::ALL
                            .into_iter()
                            .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                            .collect_view()}
                    </select>
                    <input
                        class="form-input"
                        placeholder="Salary"
                        prop:value=move || form.with(|f| f.salary.clone())
                        on:input=move |ev| form.update(|f| f.salary = event_target_value(&ev))
                    />
                    <div class="offer-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            "Save"
                        </button>
                        <button class="btn" type="button" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading offers..."</p> }>
                <Show when=move || offers.with(|o| !o.is_empty()) fallback=|| view! { <p class="page-status">"No offers yet."</p> }>
                    <div class="company-dashboard__offers">
                        <For each=move || offers.get() key=|offer| offer.id.clone() let:offer>
                            <OfferCard offer=offer.clone()>
                                <button class="btn" on:click={
                                    let offer = offer.clone();
                                    move |_| selected.set(Some(offer.clone()))
                                }>"Applicants"</button>
                                <button class="btn" on:click={
                                    let offer = offer.clone();
                                    move |_| edit_requested.set(Some(offer.clone()))
                                }>"Edit"</button>
                                <button class="btn btn--danger" on:click={
                                    let id = offer.id.clone();
                                    move |_| delete_requested.set(Some(id.clone()))
                                }>"Delete"</button>
                            </OfferCard>
                        </For>
                    </div>
                </Show>
            </Show>
            <Show when=move || selected.with(Option::is_some)>
                <section class="applicants">
                    <h2>"Applicants: " {move || selected.with(|s| s.as_ref().map(|o| o.title.clone()).unwrap_or_default())}</h2>
                    <Show when=move || applicants.with(|a| !a.is_empty()) fallback=|| view! { <p class="page-status">"No applications yet."</p> }>
                        <table class="applicants__table">
                            <thead>
                                <tr>
                                    <th>"Candidate"</th>
                                    <th>"Email"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || applicants.get() key=|a| (a.id.clone(), a.status.code().to_owned()) let:applicant>
                                    <tr>
                                        <td>{applicant.candidate_name.clone()}</td>
                                        <td>{applicant.email.clone().unwrap_or_default()}</td>
                                        <td>
                                            <select
                                                prop:value=applicant.status.code().to_owned()
                                                on:change={
                                                    let id = applicant.id.clone();
                                                    move |ev| {
                                                        let status = ApplicationStatus::from(event_target_value(&ev));
                                                        status_change.set(Some((id.clone(), status)));
                                                    }
                                                }
                                            >
                                                {ApplicationStatus::TRACKED
                                                    .into_iter()
                                                    .map(|s| {
                                                        let code = s.code().to_owned();
                                                        view! { <option value=code>{s.label().to_owned()}</option> }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                </For>
                            </tbody>
                        </table>
                    </Show>
                    <button class="btn" on:click=move |_| selected.set(None)>
                        "Close"
                    </button>
                </section>
            </Show>
        </section>
    }
}
