//! Role screen: shown when one account holds several roles.

use contracts::auth::Role;
use contracts::flow::{LoginFlow, Stage};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::login_flow::{ensure_entry, send_login_step};
use crate::state::session::SessionState;
use crate::util::storage;

#[component]
pub fn SelectRolePage() -> impl IntoView {
    let flow = expect_context::<RwSignal<LoginFlow>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    ensure_entry(flow, Stage::Role, navigate.clone());

    let choice_error = RwSignal::new(None::<String>);

    // Buttons only record the pick; the request is issued here.
    let picked = RwSignal::new(None::<Role>);
    let navigate_step = navigate.clone();
    Effect::new(move || {
        let Some(role) = picked.get() else {
            return;
        };
        picked.set(None);
        match flow.try_update(|f| f.choose_role(&role)) {
            Some(Ok(request)) => {
                choice_error.set(None);
                send_login_step(flow, session, request, Stage::Role, navigate_step.clone());
            }
            Some(Err(e)) => choice_error.set(Some(e.to_string())),
            None => {}
        }
    });

    let on_back = {
        let navigate = navigate.clone();
        move |_| {
            flow.update(LoginFlow::back);
            storage::clear_pending();
            navigate(Stage::Credentials.path(), NavigateOptions::default());
        }
    };

    let roles = move || flow.with(|f| f.role_choices().to_vec());
    let submitting = move || flow.with(LoginFlow::submitting);
    let error = move || choice_error.get().or_else(|| flow.with(|f| f.error().map(str::to_owned)));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Choose how to continue"</h1>
                <p class="login-card__subtitle">"Your account has more than one role."</p>
                <div class="choice-list">
                    <For each=roles key=|role| role.as_str().to_owned() let:role>
                        <button
                            class="choice-button"
                            disabled=submitting
                            on:click={
                                let role = role.clone();
                                move |_| picked.set(Some(role.clone()))
                            }
                        >
                            {role.label().to_owned()}
                        </button>
                    </For>
                </div>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <button class="btn login-back" on:click=on_back disabled=submitting>
                    "Back"
                </button>
            </div>
        </div>
    }
}
