//! Events accepted at the hub's ingress.

use tokio::sync::oneshot;

use crate::domain::{ConnectionId, Message, Participant};

/// One unit of work for the coordinator.
pub(super) enum HubEvent {
    /// Admit a participant
    Join(Box<dyn Participant>),
    /// Remove a participant, if still a member
    Leave(ConnectionId),
    /// Fan a message from member `from` out to every member
    Forward { from: ConnectionId, message: Message },
    /// Report the current roster
    Snapshot(oneshot::Sender<Vec<String>>),
}

impl std::fmt::Debug for HubEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Join(participant) => f
                .debug_tuple("Join")
                .field(&participant.id())
                .field(&participant.identity())
                .finish(),
            Self::Leave(id) => f.debug_tuple("Leave").field(id).finish(),
            Self::Forward { from, message } => f
                .debug_struct("Forward")
                .field("from", from)
                .field("message", message)
                .finish(),
            Self::Snapshot(_) => f.write_str("Snapshot"),
        }
    }
}
