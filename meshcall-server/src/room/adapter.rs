use crate::error::AdapterError;
use async_trait::async_trait;
use meshcall_core::{ClientId, Message};
use std::collections::HashMap;

/// Per-room client registry shared by every connection in the room.
///
/// Implementations only promise that each call is atomic on its own. A
/// `clients` read followed by a `broadcast` may observe another connection's
/// writes in between.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Overwrites the metadata of a client. An empty value marks it not ready.
    async fn set_metadata(&self, client_id: &ClientId, value: &str) -> Result<(), AdapterError>;

    /// Snapshot of every room member and its metadata, in no particular order.
    async fn clients(&self) -> Result<HashMap<ClientId, String>, AdapterError>;

    /// Delivers a message to every room member, the sender included.
    async fn broadcast(&self, message: Message) -> Result<(), AdapterError>;

    /// Delivers a message to a single room member.
    async fn emit(&self, client_id: &ClientId, message: Message) -> Result<(), AdapterError>;
}
