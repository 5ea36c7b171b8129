// Real-time channel messages
//
// Every frame is `{"event": "<name>", "data": <payload>}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::ideas::{Idea, IdeaScores};

/// Peer payload relayed as-is to the other members of `session_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
    pub session_id: String,
    /// Everything else the client sent (nodes, edges, comment text...)
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

/// Client → server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    JoinSession(String),
    LeaveSession,
    MindmapUpdate(RelayPayload),
    IdeaDiscussion(RelayPayload),
}

/// Server → session members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    NewIdea(Idea),
    #[serde(rename_all = "camelCase")]
    IdeaScored {
        idea_id: Uuid,
        scores: IdeaScores,
    },
    MindmapChanged(RelayPayload),
    NewDiscussion(RelayPayload),
    /// Sent only to the connection whose frame could not be handled
    Error {
        message: String,
    },
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::NewIdea(_) => "newIdea",
            ServerEvent::IdeaScored { .. } => "ideaScored",
            ServerEvent::MindmapChanged(_) => "mindmapChanged",
            ServerEvent::NewDiscussion(_) => "newDiscussion",
            ServerEvent::Error { .. } => "error",
        }
    }
}
