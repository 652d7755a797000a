use crate::room::Adapter;
use futures::stream::BoxStream;
use meshcall_core::{ClientId, Message, RoomId};
use std::sync::Arc;

/// One connection's view of its room: who it is, where it is, and what it sent.
///
/// `messages` yields inbound messages in receipt order and ends when the
/// connection goes away.
pub struct Subscription {
    pub client_id: ClientId,
    pub room: RoomId,
    pub adapter: Arc<dyn Adapter>,
    pub messages: BoxStream<'static, Message>,
}
