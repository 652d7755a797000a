use crate::signaling::{Dispatcher, SignalingService};
use axum::extract::ws::{Message as WsMessage, WebSocket};
use axum::extract::{Path, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::stream::SplitStream;
use futures::{SinkExt, Stream, StreamExt, future};
use meshcall_core::{ClientId, Message, RoomId};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path((room, client_id)): Path<(String, String)>,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    let room = RoomId::from(room);
    let client_id = ClientId::from(client_id);

    ws.on_upgrade(move |socket| handle_socket(socket, room, client_id, service))
}

async fn handle_socket(
    socket: WebSocket,
    room: RoomId,
    client_id: ClientId,
    service: SignalingService,
) {
    info!("New WebSocket connection: {} in room {}", client_id, room);

    let (mut sender, receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    let inbound = inbound_messages(receiver, client_id.clone());
    let subscription = match service.subscribe(room.clone(), client_id.clone(), tx, inbound) {
        Ok(subscription) => subscription,
        Err(e) => {
            error!("Error subscribing to websocket messages: {}", e);
            let _ = sender.send(WsMessage::Close(None)).await;
            return;
        }
    };

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let json = match serde_json::to_string(&msg) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize {} message: {}", msg.kind(), e);
                    continue;
                }
            };
            if sender.send(WsMessage::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(Dispatcher::run(subscription));

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.unsubscribe(&room, &client_id);
    info!("WebSocket disconnected: {} in room {}", client_id, room);
}

/// Decodes text frames into messages until the peer closes or the socket errors.
///
/// Frames that are not valid JSON messages are logged and skipped.
fn inbound_messages(
    receiver: SplitStream<WebSocket>,
    client_id: ClientId,
) -> impl Stream<Item = Message> + Send + 'static {
    receiver
        .take_while(|frame| {
            let open = matches!(frame, Ok(msg) if !matches!(msg, WsMessage::Close(_)));
            future::ready(open)
        })
        .filter_map(move |frame| {
            let decoded = match frame {
                Ok(WsMessage::Text(text)) => match serde_json::from_str::<Message>(&text) {
                    Ok(message) => Some(message),
                    Err(e) => {
                        warn!("Invalid message from {}: {}", client_id, e);
                        None
                    }
                },
                _ => None,
            };
            future::ready(decoded)
        })
}
