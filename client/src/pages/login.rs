//! Credential screen: first step of the login flow.

use contracts::flow::{LoginFlow, Stage};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::login_flow::send_login_step;
use crate::state::session::SessionState;
use crate::util::storage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<LoginFlow>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    // Prefill from "remember me" once in the browser.
    Effect::new(move || {
        if let Some(saved) = storage::remembered_email() {
            email.set(saved);
            remember.set(true);
        }
    });

    // Already signed in when the session first loads: skip the form. Later
    // resolutions navigate from `send_login_step` instead.
    let navigate_home = navigate.clone();
    let checked = RwSignal::new(false);
    Effect::new(move || {
        let state = session.get();
        if checked.get_untracked() || !state.loaded {
            return;
        }
        checked.set(true);
        if let Some(identity) = state.identity.as_ref() {
            let target = contracts::redirect::destination(identity, storage::take_redirect().as_deref());
            navigate_home(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let request = flow.try_update(|f| f.submit_credentials(&email_value, &password.get_untracked()));
        match request {
            Some(Ok(request)) => {
                form_error.set(None);
                storage::remember_email(&email_value, remember.get_untracked());
                send_login_step(flow, session, request, Stage::Credentials, navigate.clone());
            }
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let error = move || form_error.get().or_else(|| flow.with(|f| f.error().map(str::to_owned)));
    let submitting = move || flow.with(LoginFlow::submitting);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Access your candidate or company account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || if submitting() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
