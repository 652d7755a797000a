use meshcall_core::{ClientId, MessageType, PayloadError};
use thiserror::Error;

/// Failures reported by an [`Adapter`](crate::Adapter) operation.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("client {0} is not in the room")]
    ClientNotFound(ClientId),

    #[error("client {0} is already in the room")]
    DuplicateClient(ClientId),

    #[error("outbound channel of client {0} is closed")]
    ChannelClosed(ClientId),

    #[error("broadcast did not reach {} client(s)", .failed.len())]
    BroadcastFailed { failed: Vec<ClientId> },

    /// Store or network failure of a non-local adapter.
    #[error("adapter backend error: {0}")]
    Backend(String),
}

/// Why a single inbound event was dropped. Never fatal to the connection.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("{operation}: {source}")]
    Adapter {
        operation: &'static str,
        #[source]
        source: AdapterError,
    },

    #[error("failed to encode {kind} message: {source}")]
    Encode {
        kind: MessageType,
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    pub(crate) fn adapter(operation: &'static str) -> impl FnOnce(AdapterError) -> Self {
        move |source| DispatchError::Adapter { operation, source }
    }

    pub(crate) fn encode(kind: MessageType) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| DispatchError::Encode { kind, source }
    }
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("room name is empty")]
    EmptyRoom,

    #[error("client id is empty")]
    EmptyClientId,

    #[error("failed to join room: {0}")]
    Join(#[from] AdapterError),
}
