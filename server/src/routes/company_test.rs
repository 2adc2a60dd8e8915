use super::*;
use crate::remote::test_helpers::ScriptedRemote;
use crate::routes::test_helpers::{authed, identity, send};
use contracts::auth::Role;
use serde_json::json;
use std::sync::Arc;

fn owner() -> contracts::auth::Identity {
    identity(Role::Owner, Some("c1"))
}

#[tokio::test]
async fn offers_are_scoped_to_active_company() {
    let remote = Arc::new(ScriptedRemote::new().reply(200, json!({"data": [{"id": 1, "title": "Ops"}]})));
    let (status, _, body) = send(remote.clone(), authed("GET", "/api/company/offers", &owner(), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Ops");
    let sent = &remote.requests()[0];
    assert_eq!(sent.path, "companies/c1/offers");
    assert_eq!(sent.auth.as_ref().unwrap().company_id.as_deref(), Some("c1"));
}

#[tokio::test]
async fn create_offer_returns_201() {
    let remote = Arc::new(ScriptedRemote::new().reply(201, json!({"data": {"id": 8, "title": "Backend developer"}})));
    let draft = json!({
        "title": "Backend developer",
        "description": "Build and operate our hiring APIs.",
        "modality": "REMOTE"
    });
    let (status, _, body) = send(remote, authed("POST", "/api/company/offers", &owner(), Some(&draft))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "8");
}

#[tokio::test]
async fn invalid_offer_draft_is_400_without_remote_call() {
    let remote = Arc::new(ScriptedRemote::new());
    let draft = json!({"title": "", "description": "x"});
    let (status, _, body) = send(remote.clone(), authed("POST", "/api/company/offers", &owner(), Some(&draft))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn missing_company_scope_is_422() {
    let remote = Arc::new(ScriptedRemote::new());
    let no_company = identity(Role::Employee, None);
    let (status, _, body) = send(remote, authed("GET", "/api/company/employees", &no_company, None)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "no_organization");
}

#[tokio::test]
async fn status_change_patches_application() {
    let remote = Arc::new(ScriptedRemote::new().reply(200, json!({})));
    let change = json!({"status": "ACCEPTED"});
    let (status, _, _) =
        send(remote.clone(), authed("PATCH", "/api/company/applications/31", &owner(), Some(&change))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let sent = &remote.requests()[0];
    assert_eq!(sent.path, "applications/31");
    assert_eq!(sent.body, Some(json!({"status": "ACCEPTED"})));
}

#[tokio::test]
async fn delete_and_remove_return_204() {
    let remote = Arc::new(ScriptedRemote::new().reply(204, json!(null)).reply(204, json!(null)));
    let (offer, _, _) = send(remote.clone(), authed("DELETE", "/api/company/offers/3", &owner(), None)).await;
    let (employee, _, _) = send(remote.clone(), authed("DELETE", "/api/company/employees/e1", &owner(), None)).await;
    assert_eq!(offer, StatusCode::NO_CONTENT);
    assert_eq!(employee, StatusCode::NO_CONTENT);
    assert_eq!(remote.requests()[1].path, "companies/c1/employees/e1");
}

#[tokio::test]
async fn applicants_listed_per_offer() {
    let remote = Arc::new(ScriptedRemote::new().reply(
        200,
        json!([{"id": 1, "nombre": "Luis", "estado": "PENDIENTE"}]),
    ));
    let (status, _, body) =
        send(remote, authed("GET", "/api/company/offers/3/applicants", &owner(), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["status"], "PENDING");
    assert_eq!(body[0]["candidateName"], "Luis");
}

#[tokio::test]
async fn malformed_body_gets_json_failure() {
    use axum::body::Body;
    use axum::http::{Request, header};

    use crate::routes::test_helpers::session_header;

    let remote = Arc::new(ScriptedRemote::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/company/employees")
        .header(header::COOKIE, session_header(&owner()))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let (status, _, body) = send(remote.clone(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "validation");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(remote.requests().is_empty());
}
