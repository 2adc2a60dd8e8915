//! Top navigation bar with role-aware links and the logout control.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use contracts::auth::Identity;
use contracts::redirect::{ADMIN_DASHBOARD, COMPANY_DASHBOARD, LOGIN, OFFER_LISTING, PROFILE_COMPLETION};
use leptos::prelude::*;

use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::{cookies, storage};

pub const EMPLOYEES: &str = "/companies/employees";

/// `(label, href)` pairs for the current user.
#[must_use]
pub fn nav_links(identity: Option<&Identity>) -> Vec<(&'static str, &'static str)> {
    match identity {
        None => vec![("Offers", OFFER_LISTING), ("Sign in", LOGIN)],
        Some(user) if user.role.is_org_scoped() => {
            vec![("Dashboard", COMPANY_DASHBOARD), ("Employees", EMPLOYEES), ("Offers", OFFER_LISTING)]
        }
        Some(user) if user.role.is_admin() => vec![("Candidates", ADMIN_DASHBOARD), ("Offers", OFFER_LISTING)],
        Some(_) => vec![("Offers", OFFER_LISTING), ("Profile", PROFILE_COMPLETION)],
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let links = move || session.with(|s| nav_links(s.identity.as_ref()));
    let who = move || {
        session.with(|s| {
            s.identity.as_ref().map(|user| match user.active_company() {
                Some(company) => format!("{} · {}", user.name, company.name),
                None => user.name.clone(),
            })
        })
    };

    // Full reload onto the login page once the server expired the cookies;
    // the reload also drops the in-memory store.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            storage::clear_pending();
            cookies::clear_readable();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(LOGIN);
            }
        });
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "JobBoard"
            </a>
            <nav class="site-header__nav">
                {move || {
                    links()
                        .into_iter()
                        .map(|(label, href)| view! { <a class="site-header__link" href=href>{label}</a> })
                        .collect_view()
                }}
            </nav>
            <span class="site-header__spacer"></span>
            <Show when=move || who().is_some()>
                <span class="site-header__self">{move || who().unwrap_or_default()}</span>
                <button class="btn site-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
