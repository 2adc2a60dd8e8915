//! Employees of the active company: list, invite, remove.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use contracts::auth::Role;
use contracts::catalog::{Employee, EmployeeDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::SessionState;
use crate::util::auth::{Access, handle_failure, install_route_guard};

/// Roles a company can hand out to new staff.
pub const INVITABLE_ROLES: [Role; 2] = [Role::Employee, Role::Owner];

/// Role picked in the invite form; anything unexpected falls back to employee.
#[must_use]
pub fn invitable_role(code: &str) -> Role {
    INVITABLE_ROLES.into_iter().find(|r| r.as_str() == code).unwrap_or(Role::Employee)
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_route_guard(session, Access::Organization, use_navigate());

    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u32);

    let draft = RwSignal::new(EmployeeDraft::default());
    let inviting = RwSignal::new(false);
    let remove_requested = RwSignal::new(None::<String>);

    let company_name = move || {
        session.with(|s| s.identity.as_ref().and_then(|i| i.active_company()).map(|c| c.name.clone()))
            .unwrap_or_default()
    };

    Effect::new(move || {
        reload.track();
        if !session.with(|s| s.identity.as_ref().is_some_and(|i| Access::Organization.allows(i))) {
            return;
        }
        spawn_local(async move {
            let result = api::employees().await;
            let _ = loading.try_set(false);
            match result {
                Ok(list) => {
                    let _ = employees.try_set(list);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    Effect::new(move || {
        let Some(id) = remove_requested.get() else {
            return;
        };
        remove_requested.set(None);
        spawn_local(async move {
            match api::remove_employee(&id).await {
                Ok(()) => {
                    let _ = reload.try_update(|n| *n += 1);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    });

    let on_invite = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if inviting.get_untracked() {
            return;
        }
        let request = draft.get_untracked();
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        inviting.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::invite_employee(&request).await;
            let _ = inviting.try_set(false);
            match result {
                Ok(_) => {
                    let _ = draft.try_set(EmployeeDraft::default());
                    let _ = reload.try_update(|n| *n += 1);
                }
                Err(failure) => {
                    let _ = error.try_set(Some(handle_failure(session, &failure)));
                }
            }
        });
    };

    view! {
        <section class="employees-page">
            <h1>"Team " {company_name}</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-status page-status--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="employee-form" on:submit=on_invite>
                <input
                    class="form-input"
                    placeholder="Full name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="email"
                    placeholder="name@company.com"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
                <select
                    class="form-input"
                    prop:value=move || draft.with(|d| d.role.as_str().to_owned())
                    on:change=move |ev| draft.update(|d| d.role = invitable_role(&event_target_value(&ev)))
                >
                    {INVITABLE_ROLES
                        .into_iter()
                        .map(|role| {
                            let code = role.as_str().to_owned();
                            view! { <option value=code>{role.label().to_owned()}</option> }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || inviting.get()>
                    "Invite"
                </button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading team..."</p> }>
                <table class="employees-page__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || employees.get() key=|e| e.id.clone() let:employee>
                            <tr>
                                <td>{employee.name.clone()}</td>
                                <td>{employee.email.clone()}</td>
                                <td>{employee.role.label().to_owned()}</td>
                                <td>
                                    <button class="btn btn--danger" on:click={
                                        let id = employee.id.clone();
                                        move |_| remove_requested.set(Some(id.clone()))
                                    }>"Remove"</button>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
