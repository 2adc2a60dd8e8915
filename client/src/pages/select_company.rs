//! Company screen: pick the organization to work in.

#[cfg(test)]
#[path = "select_company_test.rs"]
mod select_company_test;

use contracts::FailureKind;
use contracts::flow::{FlowState, LoginFlow, Stage};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::login_flow::{ensure_entry, send_login_step};
use crate::state::session::SessionState;
use crate::util::{cookies, storage};

/// Copy shown when picking a company failed.
#[must_use]
pub fn company_failure_message(kind: FailureKind, message: &str) -> String {
    match kind {
        FailureKind::NoOrganization => "This account is not linked to that company.".to_owned(),
        FailureKind::InvalidCredentials | FailureKind::Unauthorized => {
            "Your sign-in expired. Go back and enter your credentials again.".to_owned()
        }
        FailureKind::Server | FailureKind::Network => {
            "The server could not complete the sign-in. Try again in a moment.".to_owned()
        }
        FailureKind::InvalidData | FailureKind::Validation => {
            "The selected company was not accepted. Pick another one or go back.".to_owned()
        }
        _ if message.trim().is_empty() => "Could not sign in to that company.".to_owned(),
        _ => message.to_owned(),
    }
}

#[component]
pub fn SelectCompanyPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<LoginFlow>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    ensure_entry(flow, Stage::Company, navigate.clone());

    let choice_error = RwSignal::new(None::<String>);
    let picked = RwSignal::new(None::<String>);
    let navigate_step = navigate.clone();
    Effect::new(move || {
        let Some(company_id) = picked.get() else {
            return;
        };
        picked.set(None);
        match flow.try_update(|f| f.choose_company(&company_id)) {
            Some(Ok(request)) => {
                choice_error.set(None);
                send_login_step(flow, session, request, Stage::Company, navigate_step.clone());
            }
            Some(Err(e)) => choice_error.set(Some(e.to_string())),
            None => {}
        }
    });

    // Leaving this screen drops the half-finished login everywhere.
    let on_back = {
        let navigate = navigate.clone();
        move |_| {
            flow.update(LoginFlow::back);
            storage::clear_pending();
            cookies::clear_readable();
            session.update(SessionState::clear);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(crate::net::api::logout());
            navigate(Stage::Credentials.path(), NavigateOptions::default());
        }
    };

    let companies = move || flow.with(|f| f.company_choices().to_vec());
    let role_label = move || {
        flow.with(|f| f.pending().and_then(|p| p.selected_role.as_ref()).map(|r| r.label().to_owned()))
            .unwrap_or_default()
    };
    let submitting = move || flow.with(LoginFlow::submitting);
    let error = move || {
        choice_error.get().or_else(|| {
            flow.with(|f| match f.state() {
                FlowState::Failed { kind, message, .. } => Some(company_failure_message(*kind, message)),
                _ => None,
            })
        })
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Choose a company"</h1>
                <p class="login-card__subtitle">"Signing in as " {role_label}</p>
                <div class="choice-list">
                    <For each=companies key=|company| company.id.clone() let:company>
                        <button
                            class="choice-button"
                            disabled=submitting
                            on:click={
                                let id = company.id.clone();
                                move |_| picked.set(Some(id.clone()))
                            }
                        >
                            {company.name.clone()}
                        </button>
                    </For>
                </div>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <button class="btn login-back" on:click=on_back disabled=submitting>
                    "Back to sign in"
                </button>
            </div>
        </div>
    }
}
