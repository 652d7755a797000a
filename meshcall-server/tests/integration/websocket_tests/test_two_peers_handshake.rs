use meshcall_core::MessageType;
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::{
    TestClient, TestServer, hang_up, ids, offer, ready, relay_payload, signal, users_payload,
};

#[tokio::test]
async fn test_two_peers_handshake() {
    init_tracing();

    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server, "call", "a")
        .await
        .expect("alice failed to connect");
    let mut bob = TestClient::connect(&server, "call", "b")
        .await
        .expect("bob failed to connect");

    alice
        .send(&ready(&alice.room, "alice"))
        .await
        .expect("send failed");
    let users = users_payload(&alice.recv_users_from(alice.client_id.clone()).await.unwrap());
    assert_eq!(users.peer_ids, ids(&["a"]));

    bob.send(&ready(&bob.room, "bob")).await.expect("send failed");
    let users = users_payload(&bob.recv_users_from(bob.client_id.clone()).await.unwrap());
    assert_eq!(users.peer_ids, ids(&["a", "b"]));
    assert_eq!(users.nicknames[&alice.client_id], "alice");
    assert_eq!(users.nicknames[&bob.client_id], "bob");

    // Alice hears about Bob and starts the negotiation.
    let seen_by_alice = users_payload(&alice.recv_users_from(bob.client_id.clone()).await.unwrap());
    assert_eq!(seen_by_alice, users);

    let sdp = offer("v=0\r\n");
    alice
        .send(&signal(&alice.room, &bob.client_id, sdp.clone()))
        .await
        .expect("send failed");

    let relayed = bob.recv_kind(MessageType::Signal).await.unwrap();
    let relay = relay_payload(&relayed);
    assert_eq!(relay.user_id, alice.client_id);
    assert_eq!(relay.signal, sdp);

    // Bob hangs up: he stays connected but is no longer offered to Alice.
    bob.send(&hang_up(&bob.room)).await.expect("send failed");

    // A signal to himself comes back only after the hang-up was handled.
    bob.send(&signal(&bob.room, &bob.client_id, json!("sync")))
        .await
        .expect("send failed");
    bob.recv_kind(MessageType::Signal).await.unwrap();

    alice
        .send(&ready(&alice.room, "alice"))
        .await
        .expect("send failed");

    let users = users_payload(&alice.recv_users_from(alice.client_id.clone()).await.unwrap());
    assert_eq!(users.peer_ids, ids(&["a"]));
    let users = users_payload(&bob.recv_users_from(alice.client_id.clone()).await.unwrap());
    assert_eq!(users.peer_ids, ids(&["a"]));

    alice.close().await.expect("close failed");
    bob.close().await.expect("close failed");
}
