// Client frame handling, independent of the socket transport

use super::{ClientEvent, ConnectionId, ServerEvent, SessionBroadcaster};
use crate::ideas::normalize_session_id;

/// Apply one text frame received from `conn`.
///
/// Malformed frames are answered with an `error` event to the sender only;
/// the connection stays open.
pub fn dispatch_client_event(broadcaster: &SessionBroadcaster, conn: ConnectionId, frame: &str) {
    let event = match serde_json::from_str::<ClientEvent>(frame) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(connection_id = %conn, error = %e, "Unparseable client frame");
            broadcaster.send_to(
                conn,
                ServerEvent::Error {
                    message: format!("Invalid message: {}", e),
                },
            );
            return;
        }
    };

    match event {
        ClientEvent::JoinSession(session_id) => {
            let session_id = normalize_session_id(Some(&session_id));
            broadcaster.join(conn, &session_id);
        }
        ClientEvent::LeaveSession => {
            broadcaster.leave(conn);
        }
        ClientEvent::MindmapUpdate(payload) => {
            let session_id = payload.session_id.clone();
            let delivered =
                broadcaster.relay(conn, &session_id, ServerEvent::MindmapChanged(payload));
            tracing::debug!(connection_id = %conn, %session_id, delivered, "Mind map relayed");
        }
        ClientEvent::IdeaDiscussion(payload) => {
            let session_id = payload.session_id.clone();
            let delivered =
                broadcaster.relay(conn, &session_id, ServerEvent::NewDiscussion(payload));
            tracing::debug!(connection_id = %conn, %session_id, delivered, "Discussion relayed");
        }
    }
}
