use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer, ids, ready, users_payload};

#[tokio::test]
async fn test_invalid_frames_are_skipped() {
    init_tracing();

    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server, "call", "a")
        .await
        .expect("alice failed to connect");

    for frame in [
        "not json",
        r#"{"room":"call"}"#,
        r#"{"type":"ready","room":"call","payload":{"nick":"alice"}}"#,
        r#"{"type":"dance","room":"call","payload":{}}"#,
    ] {
        alice.send_raw(frame).await.expect("send failed");
    }

    alice
        .send(&ready(&alice.room, "alice"))
        .await
        .expect("send failed");

    let users = users_payload(&alice.recv().await.expect("connection dropped"));
    assert_eq!(users.peer_ids, ids(&["a"]));
}
