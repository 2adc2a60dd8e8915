use super::*;
use crate::remote::test_helpers::ScriptedRemote;
use crate::routes::test_helpers::{authed, identity, send};
use axum::body::Body;
use axum::http::Request;
use contracts::auth::Role;
use serde_json::json;
use std::sync::Arc;

#[test]
fn page_query_defaults_and_clamps() {
    assert_eq!(PageQuery::default().resolve(), (1, DEFAULT_PAGE_SIZE));
    assert_eq!(PageQuery { page: Some(0), limit: Some(0) }.resolve(), (1, 1));
    assert_eq!(PageQuery { page: Some(4), limit: Some(500) }.resolve(), (4, MAX_PAGE_SIZE));
}

#[tokio::test]
async fn listing_is_public_and_paginated() {
    let remote = Arc::new(ScriptedRemote::new().reply(
        200,
        json!({"data": [{"id": 1, "titulo": "Dev"}, {"id": 2, "titulo": "QA"}], "meta": {"page": 1, "totalPages": 2}}),
    ));
    let request = Request::builder().uri("/api/offers?page=1&limit=2").body(Body::empty()).unwrap();
    let (status, _, body) = send(remote.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(remote.requests()[0].query[1], ("limit".to_owned(), "2".to_owned()));
}

#[tokio::test]
async fn listing_surfaces_remote_outage_as_502() {
    let remote = Arc::new(ScriptedRemote::new().reply(503, json!({"message": "mantenimiento"})));
    let request = Request::builder().uri("/api/offers").body(Body::empty()).unwrap();
    let (status, _, body) = send(remote, request).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "server");
    assert_eq!(body["message"], "mantenimiento");
}

#[tokio::test]
async fn apply_requires_session() {
    let remote = Arc::new(ScriptedRemote::new());
    let request = Request::builder().method("POST").uri("/api/offers/5/apply").body(Body::empty()).unwrap();
    let (status, _, _) = send(remote.clone(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn apply_forwards_bearer_token() {
    let remote = Arc::new(ScriptedRemote::new().reply(201, json!({"data": {"id": 77}})));
    let candidate = identity(Role::Candidate, None);
    let (status, _, _) = send(remote.clone(), authed("POST", "/api/offers/5/apply", &candidate, None)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let sent = &remote.requests()[0];
    assert_eq!(sent.path, "offers/5/applications");
    assert_eq!(sent.auth.as_ref().unwrap().token, "tok");
    assert_eq!(sent.auth.as_ref().unwrap().company_id, None);
}
