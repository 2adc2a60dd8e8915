use super::*;

#[test]
fn missing_membership_gets_dedicated_copy() {
    let message = company_failure_message(FailureKind::NoOrganization, "raw");
    assert!(message.contains("not linked"));
}

#[test]
fn expired_credentials_point_back_to_sign_in() {
    let message = company_failure_message(FailureKind::InvalidCredentials, "raw");
    assert!(message.contains("Go back"));
}

#[test]
fn server_failures_hide_remote_text() {
    let message = company_failure_message(FailureKind::Server, "NullPointerException at line 42");
    assert!(message.contains("server"));
    assert!(!message.contains("NullPointer"));
    assert_eq!(company_failure_message(FailureKind::Network, "timeout"), message);
}

#[test]
fn rejected_payloads_get_invalid_data_copy() {
    let message = company_failure_message(FailureKind::InvalidData, "field empresaId: bad");
    assert!(message.contains("not accepted"));
    assert_eq!(company_failure_message(FailureKind::Validation, "x"), message);
}

#[test]
fn other_failures_keep_message_or_fall_back() {
    assert_eq!(company_failure_message(FailureKind::Other, "Try later"), "Try later");
    assert_eq!(company_failure_message(FailureKind::Other, "  "), "Could not sign in to that company.");
}
