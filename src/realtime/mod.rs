// Real-time session synchronization

mod broadcaster;
mod events;
mod protocol;

pub use broadcaster::{ConnectionId, SessionBroadcaster};
pub use events::{ClientEvent, RelayPayload, ServerEvent};
pub use protocol::dispatch_client_event;
