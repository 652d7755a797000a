use crate::config::ServerConfig;
use crate::error::SubscribeError;
use crate::room::RoomManager;
use crate::signaling::Subscription;
use futures::{Stream, StreamExt};
use meshcall_core::{ClientId, IceServerConfig, Message, RoomId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

struct SignalingInner {
    rooms: RoomManager,
    ice_servers: Vec<IceServerConfig>,
}

/// Shared state behind every WebSocket connection.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                rooms: RoomManager::new(),
                ice_servers: config.ice_servers.clone(),
            }),
        }
    }

    pub fn get_ice_servers(&self) -> Vec<IceServerConfig> {
        self.inner.ice_servers.clone()
    }

    pub fn rooms(&self) -> &RoomManager {
        &self.inner.rooms
    }

    /// Joins `client_id` to `room` and binds its inbound stream into a [`Subscription`].
    ///
    /// Everything the room sends to the client is pushed into `outbound`.
    pub fn subscribe<S>(
        &self,
        room: RoomId,
        client_id: ClientId,
        outbound: mpsc::UnboundedSender<Message>,
        inbound: S,
    ) -> Result<Subscription, SubscribeError>
    where
        S: Stream<Item = Message> + Send + 'static,
    {
        if room.is_empty() {
            return Err(SubscribeError::EmptyRoom);
        }
        if client_id.is_empty() {
            return Err(SubscribeError::EmptyClientId);
        }

        let adapter = self.inner.rooms.join(&room, client_id.clone(), outbound)?;
        info!("Client {} subscribed to room {}", client_id, room);

        Ok(Subscription {
            client_id,
            room,
            adapter,
            messages: inbound.boxed(),
        })
    }

    pub fn unsubscribe(&self, room: &RoomId, client_id: &ClientId) {
        self.inner.rooms.leave(room, client_id);
        info!("Client {} unsubscribed from room {}", client_id, room);
    }
}
