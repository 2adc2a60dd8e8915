//! Root application component with routing and context providers.

use contracts::flow::{LoginFlow, is_flow_path};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, company_dashboard::CompanyDashboardPage, employees::EmployeesPage,
    home::HomePage, login::LoginPage, offer_detail::OfferDetailPage, offers::OffersPage,
    profile_complete::ProfileCompletePage, select_company::SelectCompanyPage, select_role::SelectRolePage,
};
use crate::state::session::SessionState;
use crate::util::{cookies, storage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and the login flow, hydrates the session once
/// in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let flow = RwSignal::new(LoginFlow::new());
    provide_context(session);
    provide_context(flow);

    // Readable cookie first; `/api/auth/me` when it is missing or unreadable.
    Effect::new(move || {
        if session.with_untracked(|s| s.loaded) {
            return;
        }
        match cookies::read_identity() {
            Some(identity) => session.update(|s| s.hydrate(Some(identity))),
            None => leptos::task::spawn_local(async move {
                let identity = crate::net::api::fetch_me().await;
                session.update(|s| s.hydrate(identity));
            }),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/job-board.css"/>
        <Title text="JobBoard"/>

        <Router>
            <FlowGuard/>
            <SiteHeader/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("login"), StaticSegment("role")) view=SelectRolePage/>
                    <Route path=(StaticSegment("login"), StaticSegment("company")) view=SelectCompanyPage/>
                    <Route path=StaticSegment("offers") view=OffersPage/>
                    <Route path=(StaticSegment("offers"), ParamSegment("id")) view=OfferDetailPage/>
                    <Route path=(StaticSegment("companies"), StaticSegment("dashboard")) view=CompanyDashboardPage/>
                    <Route path=(StaticSegment("companies"), StaticSegment("employees")) view=EmployeesPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                    <Route path=(StaticSegment("profile"), StaticSegment("complete")) view=ProfileCompletePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Abandons a half-finished login as soon as the user navigates away from
/// the login screens, so a late reply can no longer resolve it.
#[component]
fn FlowGuard() -> impl IntoView {
    let flow = expect_context::<RwSignal<LoginFlow>>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        if is_flow_path(&path) {
            return;
        }
        if flow.with_untracked(|f| *f != LoginFlow::new()) {
            flow.update(LoginFlow::abandon);
        }
        storage::clear_pending();
    });
}
