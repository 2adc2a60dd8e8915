use super::*;
use serde_json::json;

#[test]
fn endpoints_encode_path_ids() {
    assert_eq!(offer_endpoint("a b"), "/api/offers/a%20b");
    assert_eq!(apply_endpoint("7"), "/api/offers/7/apply");
    assert_eq!(applicants_endpoint("x/y"), "/api/company/offers/x%2Fy/applicants");
    assert_eq!(employee_endpoint("e1"), "/api/company/employees/e1");
}

#[test]
fn paged_endpoints_carry_page_and_limit() {
    assert_eq!(offers_endpoint(2, 12), "/api/offers?page=2&limit=12");
    assert_eq!(candidates_endpoint(1, 20), "/api/candidates?page=1&limit=20");
}

#[test]
fn failure_body_is_read_verbatim() {
    let body = json!({"success": false, "kind": "no_organization", "message": "Pick a company"}).to_string();
    let failure = failure_from_body(422, &body);
    assert_eq!(failure.kind, FailureKind::NoOrganization);
    assert_eq!(failure.message, "Pick a company");
}

#[test]
fn unreadable_failure_falls_back_to_status() {
    let failure = failure_from_body(503, "<html>bad gateway</html>");
    assert_eq!(failure.kind, FailureKind::Server);
    assert!(!failure.message.is_empty());

    let failure = failure_from_body(401, &json!({"message": "expired"}).to_string());
    assert_eq!(failure.kind, FailureKind::Unauthorized);
    assert_eq!(failure.message, "expired");
}

#[test]
fn decode_reads_success_and_rejects_garbage() {
    let page: Page<Offer> = decode(
        200,
        &json!({"items": [{"id": "1", "title": "Rust dev"}], "page": 1, "limit": 12, "total_pages": 3}).to_string(),
    )
    .unwrap();
    assert_eq!(page.items[0].title, "Rust dev");
    assert!(page.has_more());

    let err = decode::<Offer>(200, "not json").unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidData);
}

#[test]
fn expect_empty_accepts_no_content() {
    assert!(expect_empty(204, "").is_ok());
    assert_eq!(expect_empty(404, "").unwrap_err().kind, FailureKind::NotFound);
}

#[test]
fn login_reply_parses_any_status() {
    let reply = login_reply(401, &json!({"status": "failed", "kind": "invalid_credentials", "message": "Nope"}).to_string());
    assert_eq!(reply, LoginReply::Failed { kind: FailureKind::InvalidCredentials, message: "Nope".to_owned() });

    let reply = login_reply(502, "");
    assert!(matches!(reply, LoginReply::Failed { kind: FailureKind::Server, .. }));
}
