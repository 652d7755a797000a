use crate::error::DispatchError;
use crate::room::{Adapter, ready_clients};
use crate::signaling::Subscription;
use futures::{Stream, StreamExt};
use meshcall_core::{
    ClientId, InboundEvent, Message, MessageType, ReadyPayload, RoomId, SignalPayload,
    SignalRelayPayload, UsersPayload,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reacts to the events of a single connection.
///
/// Events are handled one at a time in arrival order. A failed event is
/// logged and dropped; the loop always moves on to the next one.
pub struct Dispatcher {
    client_id: ClientId,
    room: RoomId,
    adapter: Arc<dyn Adapter>,
}

impl Dispatcher {
    pub fn new(client_id: ClientId, room: RoomId, adapter: Arc<dyn Adapter>) -> Self {
        Self {
            client_id,
            room,
            adapter,
        }
    }

    /// Consumes a subscription until its message stream closes.
    pub async fn run(subscription: Subscription) {
        let Subscription {
            client_id,
            room,
            adapter,
            messages,
        } = subscription;

        Self::new(client_id, room, adapter).process(messages).await;
    }

    pub async fn process<S>(&self, mut messages: S)
    where
        S: Stream<Item = Message> + Unpin,
    {
        while let Some(message) = messages.next().await {
            if let Err(e) = self.dispatch(&message).await {
                warn!(
                    "Error handling event (event: {}, room: {}, source: {}): {}",
                    message.kind(),
                    self.room,
                    self.client_id,
                    e
                );
            }
        }

        debug!("[{}] Message stream closed in room {}", self.client_id, self.room);
    }

    pub async fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        match InboundEvent::decode(message)? {
            InboundEvent::HangUp => self.hang_up().await,
            InboundEvent::Ready(payload) => self.ready(payload).await,
            InboundEvent::Signal(payload) => self.signal(payload).await,
            InboundEvent::Unrecognized(kind) => {
                debug!("[{}] Ignoring {} event", self.client_id, kind);
                Ok(())
            }
        }
    }

    async fn hang_up(&self) -> Result<(), DispatchError> {
        info!("[{}] hangUp event", self.client_id);

        self.adapter
            .set_metadata(&self.client_id, "")
            .await
            .map_err(DispatchError::adapter("hang up"))
    }

    async fn ready(&self, payload: ReadyPayload) -> Result<(), DispatchError> {
        info!("[{}] ready event as {:?}", self.client_id, payload.nickname);

        self.adapter
            .set_metadata(&self.client_id, &payload.nickname)
            .await
            .map_err(DispatchError::adapter("ready metadata"))?;

        let nicknames: BTreeMap<ClientId, String> = ready_clients(self.adapter.as_ref())
            .await
            .map_err(DispatchError::adapter("ready clients"))?
            .into_iter()
            .collect();

        debug!("[{}] Ready clients: {:?}", self.client_id, nicknames);

        let users = Message::users(
            self.room.clone(),
            &UsersPayload::new(self.client_id.clone(), nicknames),
        )
        .map_err(DispatchError::encode(MessageType::Users))?;

        self.adapter
            .broadcast(users)
            .await
            .map_err(DispatchError::adapter("ready broadcast"))
    }

    async fn signal(&self, payload: SignalPayload) -> Result<(), DispatchError> {
        let SignalPayload {
            user_id: target,
            signal,
        } = payload;

        debug!("Send signal from: {} to {}", self.client_id, target);

        let relay = Message::signal(
            self.room.clone(),
            &SignalRelayPayload {
                user_id: self.client_id.clone(),
                signal,
            },
        )
        .map_err(DispatchError::encode(MessageType::Signal))?;

        self.adapter
            .emit(&target, relay)
            .await
            .map_err(DispatchError::adapter("signal emit"))
    }
}
