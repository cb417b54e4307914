//! # WebSocket Handlers
//!
//! Transport side of the chat relay: one WebSocket per client.
//!
//! ## Endpoints
//!
//! - `GET /ws` - WebSocket connection carrying chat events
//!
//! Every text frame is a JSON event, see [`shared::dto::chat`]. Frames that do
//! not decode are logged and dropped; the client never gets an error back.

use crate::chat::{ChatAppState, ChatSession};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use lib_core::Result;
use shared::dto::chat::{ClientEvent, ServerEvent};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// WebSocket handler for the chat channel.
///
/// **Route**: `GET /ws`
///
/// # Example
///
/// ```javascript
/// const ws = new WebSocket('ws://localhost:3000/ws');
/// ws.onopen = () => ws.send(JSON.stringify({ event: 'choose name', data: 'Alice' }));
/// ws.onmessage = (event) => {
///   const { event: name, data } = JSON.parse(event.data);
///   console.log(name, data);
/// };
/// ```
pub async fn chat_websocket(
    ws: WebSocketUpgrade,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(chat): State<Arc<ChatAppState>>,
) -> Response {
    let client_ip = headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').next().unwrap_or("").trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| addr.ip().to_string());

    debug!(client_ip = %client_ip, "[WS] UPGRADE_START path=/ws");

    ws.on_upgrade(move |socket| handle_chat_websocket(socket, chat, client_ip))
}

/// Decode one text frame into a client event.
pub fn decode_event(text: &str) -> Result<ClientEvent> {
    Ok(serde_json::from_str(text)?)
}

/// Run one chat connection until either side goes away.
///
/// Outbound events are drained from the session's channel by a spawned send
/// task; inbound frames are dispatched in order on this task.
async fn handle_chat_websocket(socket: WebSocket, chat: Arc<ChatAppState>, client_ip: String) {
    let (mut sender, mut receiver) = socket.split();
    let connection_start = Instant::now();
    let messages_sent = Arc::new(AtomicU64::new(0));
    let mut messages_received: u64 = 0;

    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();
    let mut session = ChatSession::open(chat, tx).await;
    let client_id = session.id().to_string();

    info!(
        client_id = %client_id,
        client_ip = %client_ip,
        "[WS] CONNECTED client_id={} ip={}",
        client_id,
        client_ip
    );

    let client_id_send = client_id.clone();
    let messages_sent_send = Arc::clone(&messages_sent);
    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    error!(
                        client_id = %client_id_send,
                        error = %e,
                        "[WS] SERIALIZE_ERROR client_id={} event={}",
                        client_id_send,
                        event.name()
                    );
                    continue;
                }
            };

            if let Err(e) = sender.send(Message::Text(json.into())).await {
                warn!(
                    client_id = %client_id_send,
                    error = %e,
                    "[WS] SEND_ERROR client_id={} error={}",
                    client_id_send,
                    e
                );
                break;
            }
            messages_sent_send.fetch_add(1, Ordering::Relaxed);
        }
    });

    let recv_loop = async {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    messages_received += 1;
                    match decode_event(text.as_str()) {
                        Ok(event) => session.dispatch(event).await,
                        Err(e) => {
                            warn!(
                                client_id = %client_id,
                                error = %e,
                                "[WS] FRAME_DROPPED client_id={} error={}",
                                client_id,
                                e
                            );
                        }
                    }
                }
                Ok(Message::Binary(data)) => {
                    messages_received += 1;
                    warn!(
                        client_id = %client_id,
                        size = data.len(),
                        "[WS] BINARY_DROPPED client_id={} size={}",
                        client_id,
                        data.len()
                    );
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
                Ok(Message::Close(frame)) => {
                    let reason = frame
                        .as_ref()
                        .map(|f| f.code.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    info!(
                        client_id = %client_id,
                        reason = %reason,
                        "[WS] CLOSE_RECEIVED client_id={} reason={}",
                        client_id,
                        reason
                    );
                    break;
                }
                Err(e) => {
                    warn!(
                        client_id = %client_id,
                        error = %e,
                        "[WS] RECV_ERROR client_id={} error={}",
                        client_id,
                        e
                    );
                    break;
                }
            }
        }
    };

    tokio::select! {
        result = &mut send_task => {
            if let Err(e) = result {
                error!(client_id = %client_id, error = ?e, "[WS] SEND_TASK_ERROR client_id={}", client_id);
            }
        }
        _ = recv_loop => {}
    }

    session.close().await;
    send_task.abort();

    let duration = connection_start.elapsed();
    info!(
        client_id = %client_id,
        client_ip = %client_ip,
        duration_ms = duration.as_millis(),
        messages_sent = messages_sent.load(Ordering::Relaxed),
        messages_received,
        "[WS] DISCONNECTED client_id={} ip={} duration={:.2}s",
        client_id,
        client_ip,
        duration.as_secs_f64()
    );
}
