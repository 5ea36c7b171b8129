// Session broadcaster: fan-out of events to every connection in a session
//
// Each connection owns an unbounded outbound queue. Publishing pushes into
// those queues without awaiting, so a slow socket never stalls the publisher.
// Delivery is at-most-once with no replay: a connection that is not a member
// at publish time misses the event.
//
// Lock order: a `connections` entry may be held while touching `sessions`,
// never the other way round.

use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::ServerEvent;

pub type ConnectionId = Uuid;

struct Connection {
    tx: mpsc::UnboundedSender<ServerEvent>,
    session: Option<String>,
}

#[derive(Default)]
struct Inner {
    connections: DashMap<ConnectionId, Connection>,
    sessions: DashMap<String, HashSet<ConnectionId>>,
}

/// Shared broadcaster, clone freely (it's an Arc inside)
#[derive(Clone, Default)]
pub struct SessionBroadcaster {
    inner: Arc<Inner>,
}

impl SessionBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection. The receiver yields every event delivered to it.
    pub fn connect(&self) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner
            .connections
            .insert(id, Connection { tx, session: None });
        tracing::info!(connection_id = %id, "Connection registered");
        (id, rx)
    }

    /// Put `conn` in `session_id`, leaving its previous session first.
    ///
    /// Returns the session that was left, if any. Unknown connections are ignored.
    pub fn join(&self, conn: ConnectionId, session_id: &str) -> Option<String> {
        let Some(mut entry) = self.inner.connections.get_mut(&conn) else {
            tracing::warn!(connection_id = %conn, "Join from unknown connection ignored");
            return None;
        };

        let previous = entry.session.replace(session_id.to_string());
        if let Some(prev) = &previous {
            self.remove_member(prev, conn);
        }
        self.inner
            .sessions
            .entry(session_id.to_string())
            .or_default()
            .insert(conn);

        tracing::info!(connection_id = %conn, session_id, "Connection joined session");
        previous
    }

    /// Remove `conn` from its current session. Returns the session left.
    pub fn leave(&self, conn: ConnectionId) -> Option<String> {
        let mut entry = self.inner.connections.get_mut(&conn)?;
        let previous = entry.session.take()?;
        self.remove_member(&previous, conn);
        tracing::info!(connection_id = %conn, session_id = %previous, "Connection left session");
        Some(previous)
    }

    /// Forget `conn` entirely
    pub fn disconnect(&self, conn: ConnectionId) {
        if let Some((_, connection)) = self.inner.connections.remove(&conn) {
            if let Some(session) = connection.session {
                self.remove_member(&session, conn);
            }
            tracing::info!(connection_id = %conn, "Connection disconnected");
        }
    }

    /// Deliver a server-originated event to every member of `session_id`.
    ///
    /// Returns the number of connections the event was queued for.
    pub fn publish(&self, session_id: &str, event: ServerEvent) -> usize {
        self.fan_out(session_id, event, None)
    }

    /// Relay a peer event to every member of `session_id` except `origin`
    pub fn relay(&self, origin: ConnectionId, session_id: &str, event: ServerEvent) -> usize {
        self.fan_out(session_id, event, Some(origin))
    }

    /// Send an event to a single connection (used for protocol errors)
    pub fn send_to(&self, conn: ConnectionId, event: ServerEvent) -> bool {
        self.inner
            .connections
            .get(&conn)
            .map(|c| c.tx.send(event).is_ok())
            .unwrap_or(false)
    }

    /// Session the connection currently belongs to
    pub fn session_of(&self, conn: ConnectionId) -> Option<String> {
        self.inner
            .connections
            .get(&conn)
            .and_then(|c| c.session.clone())
    }

    pub fn members(&self, session_id: &str) -> Vec<ConnectionId> {
        self.inner
            .sessions
            .get(session_id)
            .map(|m| m.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    pub fn session_count(&self) -> usize {
        self.inner.sessions.len()
    }

    fn fan_out(&self, session_id: &str, event: ServerEvent, exclude: Option<ConnectionId>) -> usize {
        // Snapshot membership so no sessions shard is held while sending.
        let members = self.members(session_id);

        let mut delivered = 0;
        let mut dead = Vec::new();
        for conn in members.into_iter().filter(|c| Some(*c) != exclude) {
            let Some(connection) = self.inner.connections.get(&conn) else {
                continue;
            };
            if connection.tx.send(event.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(conn);
            }
        }

        for conn in dead {
            tracing::debug!(connection_id = %conn, "Dropping connection with closed receiver");
            self.disconnect(conn);
        }

        tracing::debug!(session_id, event = event.name(), delivered, "Event published");
        delivered
    }

    fn remove_member(&self, session_id: &str, conn: ConnectionId) {
        if let Some(mut members) = self.inner.sessions.get_mut(session_id) {
            members.remove(&conn);
        }
        self.inner
            .sessions
            .remove_if(session_id, |_, members| members.is_empty());
    }
}
