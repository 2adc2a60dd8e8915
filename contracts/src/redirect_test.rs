use super::*;
use crate::auth::Role;

fn identity(role: Role, profile_complete: bool) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: None,
        role,
        companies: vec![],
        active_company_id: None,
        profile_complete,
    }
}

#[test]
fn organization_roles_land_on_company_dashboard() {
    for role in [Role::Owner, Role::Employee, Role::Company] {
        assert_eq!(landing_path(&identity(role, false)), COMPANY_DASHBOARD);
    }
}

#[test]
fn admin_roles_land_on_admin_dashboard() {
    for role in [Role::Admin, Role::AdminEmployee, Role::RecruitingAdmin] {
        assert_eq!(landing_path(&identity(role, false)), ADMIN_DASHBOARD);
    }
}

#[test]
fn other_roles_depend_on_profile_completion() {
    assert_eq!(landing_path(&identity(Role::Candidate, false)), PROFILE_COMPLETION);
    assert_eq!(landing_path(&identity(Role::Candidate, true)), OFFER_LISTING);
    assert_eq!(landing_path(&identity(Role::Other("AUDITOR".into()), true)), OFFER_LISTING);
}

#[test]
fn stored_target_takes_precedence() {
    let admin = identity(Role::Admin, true);
    assert_eq!(destination(&admin, Some("/offers/42")), "/offers/42");
    assert_eq!(destination(&admin, None), ADMIN_DASHBOARD);
}

#[test]
fn unsafe_stored_targets_are_ignored() {
    let admin = identity(Role::Admin, true);
    for target in ["https://evil.test", "//evil.test", "/\\evil", "/login/role", ""] {
        assert_eq!(destination(&admin, Some(target)), ADMIN_DASHBOARD, "target {target:?}");
    }
}
