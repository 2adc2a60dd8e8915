use super::*;

#[test]
fn expiry_directive_targets_root_path() {
    assert_eq!(expiry_directive("user_info"), "user_info=; Path=/; Max-Age=0; SameSite=Strict");
}

#[test]
fn readable_set_excludes_http_only_token() {
    assert!(!READABLE.contains(&contracts::cookies::AUTH_TOKEN));
    assert!(READABLE.contains(&SELECTED_COMPANY_ID));
}
