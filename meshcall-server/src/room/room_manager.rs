use crate::error::AdapterError;
use crate::room::MemoryAdapter;
use dashmap::DashMap;
use meshcall_core::{ClientId, Message, RoomId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Registry of live rooms. Rooms are created on first join and dropped once empty.
#[derive(Clone, Default)]
pub struct RoomManager {
    rooms: Arc<DashMap<RoomId, Arc<MemoryAdapter>>>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_room(&self, room: &RoomId) -> Option<Arc<MemoryAdapter>> {
        self.rooms.get(room).map(|adapter| adapter.clone())
    }

    /// Adds a client to a room, creating the room if needed.
    ///
    /// The join happens under the room's map entry so it cannot interleave
    /// with [`RoomManager::leave`] dropping the same room.
    pub fn join(
        &self,
        room: &RoomId,
        client_id: ClientId,
        sender: mpsc::UnboundedSender<Message>,
    ) -> Result<Arc<MemoryAdapter>, AdapterError> {
        let adapter = self.rooms.entry(room.clone()).or_insert_with(|| {
            info!("Creating new room: {}", room);
            Arc::new(MemoryAdapter::new(room.clone()))
        });

        adapter.join(client_id, sender)?;
        Ok(adapter.clone())
    }

    /// Removes a client and drops the room if it became empty.
    pub fn leave(&self, room: &RoomId, client_id: &ClientId) {
        if let Some(adapter) = self.rooms.get(room) {
            adapter.leave(client_id);
        }

        if self
            .rooms
            .remove_if(room, |_, adapter| adapter.is_empty())
            .is_some()
        {
            info!("Closing empty room: {}", room);
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
