//! Guaranteed leave for joined connections.

use crate::domain::{ConnectionId, HubError};

use super::Hub;

/// Issues the leave for a joined connection exactly once.
///
/// Prefer [`LeaveGuard::leave`]. If the guard is dropped instead (the owning
/// task was cancelled or panicked), the leave is submitted without waiting.
#[derive(Debug)]
#[must_use = "dropping the guard makes the connection leave the room"]
pub struct LeaveGuard {
    hub: Hub,
    id: ConnectionId,
    released: bool,
}

impl LeaveGuard {
    pub(super) fn new(hub: Hub, id: ConnectionId) -> Self {
        Self {
            hub,
            id,
            released: false,
        }
    }

    /// Leave the room and wait until the hub has accepted the request.
    pub async fn leave(mut self) -> Result<(), HubError> {
        let result = self.hub.leave(self.id).await;
        self.released = true;
        result
    }
}

impl Drop for LeaveGuard {
    fn drop(&mut self) {
        if !self.released {
            self.hub.leave_detached(self.id);
        }
    }
}
