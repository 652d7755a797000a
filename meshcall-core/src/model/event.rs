use crate::model::client::ClientId;
use crate::model::message::{Message, MessageType};
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Payload of an inbound `ready` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyPayload {
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomId>,
}

/// Payload of an inbound `signal` message. `user_id` names the target peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPayload {
    pub user_id: ClientId,
    pub signal: Value,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("{kind} payload must be an object")]
    NotAnObject { kind: MessageType },

    #[error("malformed {kind} payload: {source}")]
    Malformed {
        kind: MessageType,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    HangUp,
    Ready(ReadyPayload),
    Signal(SignalPayload),
    /// Any type a client is not expected to send. Carries the raw type for logging.
    Unrecognized(MessageType),
}

impl InboundEvent {
    pub fn decode(message: &Message) -> Result<Self, PayloadError> {
        let kind = message.kind();
        let malformed = |source: serde_json::Error| PayloadError::Malformed {
            kind: kind.clone(),
            source,
        };

        let payload = message.payload();
        let object = || {
            if payload.is_object() {
                Ok(payload)
            } else {
                Err(PayloadError::NotAnObject { kind: kind.clone() })
            }
        };

        match kind {
            MessageType::HangUp => Ok(InboundEvent::HangUp),
            MessageType::Ready => ReadyPayload::deserialize(object()?)
                .map(InboundEvent::Ready)
                .map_err(malformed),
            MessageType::Signal => SignalPayload::deserialize(object()?)
                .map(InboundEvent::Signal)
                .map_err(malformed),
            MessageType::Users | MessageType::Other(_) => {
                Ok(InboundEvent::Unrecognized(kind.clone()))
            }
        }
    }
}
