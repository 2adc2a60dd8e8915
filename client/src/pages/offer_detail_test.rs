use super::*;
use contracts::auth::Role;

fn user(role: Role) -> Identity {
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

#[test]
fn visitors_are_asked_to_sign_in() {
    assert_eq!(apply_control(None, true, false), ApplyControl::SignInFirst);
}

#[test]
fn candidates_apply_once() {
    let candidate = user(Role::Candidate);
    assert_eq!(apply_control(Some(&candidate), true, false), ApplyControl::Apply);
    assert_eq!(apply_control(Some(&candidate), true, true), ApplyControl::Applied);
}

#[test]
fn companies_admins_and_closed_offers_hide_the_control() {
    assert_eq!(apply_control(Some(&user(Role::Owner)), true, false), ApplyControl::Hidden);
    assert_eq!(apply_control(Some(&user(Role::Admin)), true, false), ApplyControl::Hidden);
    assert_eq!(apply_control(None, false, false), ApplyControl::Hidden);
}
