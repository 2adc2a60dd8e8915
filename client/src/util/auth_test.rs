use super::*;
use contracts::auth::Role;

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: None,
        role,
        companies: Vec::new(),
        active_company_id: None,
        profile_complete: true,
    }
}

fn signed_in(role: Role) -> SessionState {
    let mut session = SessionState::default();
    session.resolve(identity(role), "tok".to_owned());
    session
}

#[test]
fn loading_session_never_redirects() {
    let session = SessionState::default();
    assert_eq!(guard_action(&session, Access::Anyone, "/offers/3"), GuardAction::Stay);
}

#[test]
fn anonymous_visitor_goes_to_login_with_return_path() {
    let mut session = SessionState::default();
    session.hydrate(None);
    assert_eq!(
        guard_action(&session, Access::Admin, "/admin/dashboard"),
        GuardAction::Login { return_to: "/admin/dashboard".to_owned() }
    );
}

#[test]
fn wrong_role_lands_on_own_page() {
    let session = signed_in(Role::Candidate);
    assert_eq!(
        guard_action(&session, Access::Organization, "/companies/dashboard"),
        GuardAction::Landing("/offers")
    );
    let session = signed_in(Role::Owner);
    assert_eq!(guard_action(&session, Access::Admin, "/admin/dashboard"), GuardAction::Landing("/companies/dashboard"));
}

#[test]
fn matching_role_stays() {
    assert_eq!(guard_action(&signed_in(Role::Employee), Access::Organization, "/x"), GuardAction::Stay);
    assert_eq!(guard_action(&signed_in(Role::RecruitingAdmin), Access::Admin, "/x"), GuardAction::Stay);
    assert_eq!(guard_action(&signed_in(Role::Candidate), Access::Candidate, "/x"), GuardAction::Stay);
    assert_eq!(guard_action(&signed_in(Role::Admin), Access::Anyone, "/x"), GuardAction::Stay);
}

#[test]
fn admins_are_not_candidates() {
    assert!(!Access::Candidate.allows(&identity(Role::Admin)));
    assert!(!Access::Candidate.allows(&identity(Role::Company)));
}
