// WebSocket transport for the real-time channel
//
// One task per socket direction. The writer drains the connection's outbound
// queue; the reader hands text frames to the protocol dispatcher.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;

use super::state::AppState;
use crate::realtime::dispatch_client_event;

/// GET /ws
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let broadcaster = state.broadcaster.clone();
    let (conn, mut outbound) = broadcaster.connect();
    let (mut sink, mut stream) = socket.split();

    let mut writer = tokio::spawn(async move {
        while let Some(event) = outbound.recv().await {
            let text = match serde_json::to_string(&event) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(event = event.name(), "Failed to encode event: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    let reader_broadcaster = broadcaster.clone();
    let mut reader = tokio::spawn(async move {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => dispatch_client_event(&reader_broadcaster, conn, &text),
                Ok(Message::Close(_)) => break,
                // Binary frames are not part of the protocol; ping/pong is handled by axum
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(connection_id = %conn, "Socket read error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut writer => reader.abort(),
        _ = &mut reader => writer.abort(),
    }

    broadcaster.disconnect(conn);
}
