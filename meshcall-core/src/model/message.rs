use crate::model::client::ClientId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The `type` field of a [`Message`].
///
/// Types this server does not know are kept verbatim in [`MessageType::Other`]
/// so that they can be logged and ignored instead of failing the frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    HangUp,
    Ready,
    Signal,
    Users,
    Other(String),
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::HangUp => "hangUp",
            MessageType::Ready => "ready",
            MessageType::Signal => "signal",
            MessageType::Users => "users",
            MessageType::Other(other) => other,
        }
    }
}

impl From<String> for MessageType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "hangUp" => MessageType::HangUp,
            "ready" => MessageType::Ready,
            "signal" => MessageType::Signal,
            "users" => MessageType::Users,
            _ => MessageType::Other(s),
        }
    }
}

impl From<MessageType> for String {
    fn from(t: MessageType) -> Self {
        match t {
            MessageType::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope exchanged over a subscription: `{type, room, payload}`.
///
/// Messages are never edited after construction. A reaction to an inbound
/// message always builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    kind: MessageType,
    room: RoomId,
    #[serde(default)]
    payload: Value,
}

impl Message {
    pub fn new(kind: MessageType, room: RoomId, payload: Value) -> Self {
        Self {
            kind,
            room,
            payload,
        }
    }

    pub fn with_payload<T: Serialize>(
        kind: MessageType,
        room: RoomId,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(kind, room, serde_json::to_value(payload)?))
    }

    /// The `users` announcement broadcast after a peer becomes ready.
    pub fn users(room: RoomId, payload: &UsersPayload) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::Users, room, payload)
    }

    /// A signal relayed to a single peer.
    pub fn signal(room: RoomId, payload: &SignalRelayPayload) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::Signal, room, payload)
    }

    pub fn kind(&self) -> &MessageType {
        &self.kind
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Payload of an outbound `users` message.
///
/// `peer_ids` is sorted and `nicknames` is ordered, so two broadcasts built
/// from the same ready set serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPayload {
    pub initiator: ClientId,
    pub peer_ids: Vec<ClientId>,
    pub nicknames: BTreeMap<ClientId, String>,
}

impl UsersPayload {
    pub fn new(initiator: ClientId, nicknames: BTreeMap<ClientId, String>) -> Self {
        Self {
            initiator,
            peer_ids: nicknames.keys().cloned().collect(),
            nicknames,
        }
    }
}

/// Payload of an outbound `signal` message. `user_id` names the sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRelayPayload {
    pub user_id: ClientId,
    pub signal: Value,
}
