use crate::error::AdapterError;
use crate::room::Adapter;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use meshcall_core::{ClientId, Message, RoomId};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug)]
struct ClientEntry {
    metadata: String,
    sender: mpsc::UnboundedSender<Message>,
}

/// In-process [`Adapter`] for a single room.
///
/// Each member is registered with the sending half of its outbound channel;
/// the transport drains the other half into the socket.
#[derive(Debug)]
pub struct MemoryAdapter {
    room: RoomId,
    clients: DashMap<ClientId, ClientEntry>,
}

impl MemoryAdapter {
    pub fn new(room: RoomId) -> Self {
        Self {
            room,
            clients: DashMap::new(),
        }
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    /// Registers a client with empty metadata. A client id can be present once per room.
    pub fn join(
        &self,
        client_id: ClientId,
        sender: mpsc::UnboundedSender<Message>,
    ) -> Result<(), AdapterError> {
        match self.clients.entry(client_id) {
            Entry::Occupied(entry) => Err(AdapterError::DuplicateClient(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!("Client {} joined room {}", entry.key(), self.room);
                entry.insert(ClientEntry {
                    metadata: String::new(),
                    sender,
                });
                Ok(())
            }
        }
    }

    /// Returns false if the client was not a member.
    pub fn leave(&self, client_id: &ClientId) -> bool {
        let removed = self.clients.remove(client_id).is_some();
        if removed {
            debug!("Client {} left room {}", client_id, self.room);
        }
        removed
    }

    pub fn contains(&self, client_id: &ClientId) -> bool {
        self.clients.contains_key(client_id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl Adapter for MemoryAdapter {
    async fn set_metadata(&self, client_id: &ClientId, value: &str) -> Result<(), AdapterError> {
        let Some(mut entry) = self.clients.get_mut(client_id) else {
            return Err(AdapterError::ClientNotFound(client_id.clone()));
        };
        entry.metadata = value.to_owned();
        Ok(())
    }

    async fn clients(&self) -> Result<HashMap<ClientId, String>, AdapterError> {
        Ok(self
            .clients
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().metadata.clone()))
            .collect())
    }

    async fn broadcast(&self, message: Message) -> Result<(), AdapterError> {
        // Collect first so no shard guard is held while sending.
        let senders: Vec<_> = self
            .clients
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().sender.clone()))
            .collect();

        let mut failed = Vec::new();
        for (client_id, sender) in senders {
            if sender.send(message.clone()).is_err() {
                warn!("Broadcast in room {} skipped closed client {}", self.room, client_id);
                failed.push(client_id);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(AdapterError::BroadcastFailed { failed })
        }
    }

    async fn emit(&self, client_id: &ClientId, message: Message) -> Result<(), AdapterError> {
        let sender = self
            .clients
            .get(client_id)
            .map(|entry| entry.sender.clone())
            .ok_or_else(|| AdapterError::ClientNotFound(client_id.clone()))?;

        sender
            .send(message)
            .map_err(|_| AdapterError::ChannelClosed(client_id.clone()))
    }
}
