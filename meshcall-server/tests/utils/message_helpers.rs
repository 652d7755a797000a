use meshcall_core::{ClientId, Message, MessageType, RoomId, SignalRelayPayload, UsersPayload};
use serde_json::{Value, json};

pub fn ready(room: &RoomId, nickname: &str) -> Message {
    Message::new(MessageType::Ready, room.clone(), json!({ "nickname": nickname }))
}

pub fn hang_up(room: &RoomId) -> Message {
    Message::new(MessageType::HangUp, room.clone(), Value::Null)
}

pub fn signal(room: &RoomId, target: &ClientId, signal: Value) -> Message {
    Message::new(
        MessageType::Signal,
        room.clone(),
        json!({ "userId": target, "signal": signal }),
    )
}

pub fn offer(sdp: &str) -> Value {
    json!({ "type": "offer", "sdp": sdp })
}

/// Decodes the payload of a `users` message, panicking on any other type.
pub fn users_payload(message: &Message) -> UsersPayload {
    assert_eq!(message.kind(), &MessageType::Users, "expected users, got {message:?}");
    serde_json::from_value(message.payload().clone()).expect("invalid users payload")
}

/// Decodes the payload of a relayed `signal` message.
pub fn relay_payload(message: &Message) -> SignalRelayPayload {
    assert_eq!(message.kind(), &MessageType::Signal, "expected signal, got {message:?}");
    serde_json::from_value(message.payload().clone()).expect("invalid signal payload")
}

pub fn ids(ids: &[&str]) -> Vec<ClientId> {
    ids.iter().copied().map(ClientId::from).collect()
}
