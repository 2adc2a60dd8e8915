use super::test_helpers::*;
use crate::remote::RemoteRequest;
use crate::remote::test_helpers::ScriptedRemote;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn state_shares_the_remote_handle() {
    let remote = Arc::new(ScriptedRemote::new().reply(200, json!({"ok": true})));
    let state = test_app_state(remote.clone());
    let cloned = state.clone();

    let reply = cloned.remote.send(RemoteRequest::get("ping")).await.unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(remote.requests().len(), 1, "clone must reach the same remote");
    assert_eq!(state.config.api_url, "http://remote.test");
}
