mod client;
mod event;
mod message;
mod room;
mod signaling;

pub use client::ClientId;
pub use event::{InboundEvent, PayloadError, ReadyPayload, SignalPayload};
pub use message::{Message, MessageType, SignalRelayPayload, UsersPayload};
pub use room::RoomId;
pub use signaling::IceServerConfig;
