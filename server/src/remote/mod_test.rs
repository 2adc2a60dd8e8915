use super::*;
use serde_json::json;

#[test]
fn builder_collects_query_body_and_auth() {
    let creds = Credentials { token: "tok".to_owned(), company_id: Some("c1".to_owned()) };
    let req = RemoteRequest::get("offers")
        .query("page", 2)
        .query("limit", 12)
        .json(&json!({"a": 1}))
        .auth(&creds);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.query, vec![("page".to_owned(), "2".to_owned()), ("limit".to_owned(), "12".to_owned())]);
    assert_eq!(req.body, Some(json!({"a": 1})));
    assert_eq!(req.auth, Some(creds));
}

#[test]
fn into_body_passes_2xx() {
    let reply = RemoteReply { status: 201, body: "{}".to_owned() };
    assert_eq!(reply.into_body().unwrap(), "{}");
}

#[test]
fn into_body_extracts_remote_message() {
    let reply = RemoteReply { status: 422, body: r#"{"message":["titulo is required"]}"#.to_owned() };
    let err = reply.into_body().unwrap_err();
    assert!(matches!(
        err,
        RemoteError::Status { status: 422, message: Some(ref m) } if m == "titulo is required"
    ));
}

#[test]
fn remote_errors_map_to_failure_kinds() {
    assert_eq!(ApiFailure::from(RemoteError::Timeout).kind, FailureKind::Network);
    assert_eq!(ApiFailure::from(RemoteError::Transport("refused".into())).kind, FailureKind::Network);
    assert_eq!(ApiFailure::from(RemoteError::Decode("x".into())).kind, FailureKind::InvalidData);
    let status = ApiFailure::from(RemoteError::Status { status: 503, message: None });
    assert_eq!(status.kind, FailureKind::Server);
    assert_eq!(status.message, FailureKind::Server.default_message());
}
