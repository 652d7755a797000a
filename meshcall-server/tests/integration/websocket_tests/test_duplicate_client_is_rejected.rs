use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer, ids, ready, users_payload};

#[tokio::test]
async fn test_duplicate_client_is_rejected() {
    init_tracing();

    let server = TestServer::start().await;
    let mut first = TestClient::connect(&server, "call", "a")
        .await
        .expect("first connection failed");

    // Round trip to make sure the first connection is subscribed.
    first.send(&ready(&first.room, "alice")).await.unwrap();
    first.recv().await.unwrap();

    let mut second = TestClient::connect(&server, "call", "a")
        .await
        .expect("upgrade should still succeed");
    assert!(second.is_closed_by_server().await);

    first.send(&ready(&first.room, "alice")).await.unwrap();
    let users = users_payload(&first.recv().await.unwrap());
    assert_eq!(users.peer_ids, ids(&["a"]));
}

#[tokio::test]
async fn test_same_client_id_in_other_room_is_allowed() {
    init_tracing();

    let server = TestServer::start().await;
    let mut lobby = TestClient::connect(&server, "lobby", "a").await.unwrap();
    let mut other = TestClient::connect(&server, "other", "a").await.unwrap();

    lobby.send(&ready(&lobby.room, "alice")).await.unwrap();
    other.send(&ready(&other.room, "alice")).await.unwrap();

    assert_eq!(users_payload(&lobby.recv().await.unwrap()).peer_ids, ids(&["a"]));
    assert_eq!(users_payload(&other.recv().await.unwrap()).peer_ids, ids(&["a"]));
}
