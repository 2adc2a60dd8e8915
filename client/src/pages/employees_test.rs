use super::*;

#[test]
fn invitable_role_accepts_listed_codes() {
    assert_eq!(invitable_role(Role::Owner.as_str()), Role::Owner);
    assert_eq!(invitable_role(Role::Employee.as_str()), Role::Employee);
}

#[test]
fn invitable_role_never_grants_admin() {
    assert_eq!(invitable_role(Role::Admin.as_str()), Role::Employee);
    assert_eq!(invitable_role("garbage"), Role::Employee);
}
