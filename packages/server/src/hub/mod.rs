//! The hub: single authority over room membership and message fan-out.
//!
//! [`Hub`] is a cloneable handle that submits events into one bounded
//! ingress channel. [`Coordinator::run`] is the only code that reads or
//! writes the membership map, processing one event at a time to completion.
//! Every member therefore observes chat messages and roster snapshots in the
//! same relative order.

mod coordinator;
mod event;
mod guard;

use tokio::sync::{mpsc, oneshot};

use crate::domain::{ConnectionId, HubError, Message, Participant};

pub use coordinator::Coordinator;
pub use guard::LeaveGuard;

use event::HubEvent;

/// Default number of events buffered at the hub's ingress.
pub const DEFAULT_INGRESS_CAPACITY: usize = 256;

/// Default number of slots in each connection's delivery queue.
pub const DEFAULT_DELIVERY_CAPACITY: usize = 256;

/// Hub sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubConfig {
    /// Capacity of the shared event ingress
    pub ingress_capacity: usize,
    /// Capacity of every connection's delivery queue
    pub delivery_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            ingress_capacity: DEFAULT_INGRESS_CAPACITY,
            delivery_capacity: DEFAULT_DELIVERY_CAPACITY,
        }
    }
}

/// Handle used by connections and handlers to talk to the coordinator.
#[derive(Debug, Clone)]
pub struct Hub {
    events: mpsc::Sender<HubEvent>,
    delivery_capacity: usize,
}

impl Hub {
    /// Create a hub and the coordinator that must be run for its lifetime.
    ///
    /// Events submitted before [`Coordinator::run`] starts are buffered and
    /// processed in order once it does.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let (hub, coordinator) = Hub::new(HubConfig::default());
    /// tokio::spawn(coordinator.run());
    /// ```
    pub fn new(config: HubConfig) -> (Self, Coordinator) {
        let (events, receiver) = mpsc::channel(config.ingress_capacity.max(1));
        let hub = Self {
            events,
            delivery_capacity: config.delivery_capacity.max(1),
        };
        (hub, Coordinator::new(receiver))
    }

    /// Capacity for the delivery queue of connections joining this hub.
    pub fn delivery_capacity(&self) -> usize {
        self.delivery_capacity
    }

    /// Admit a participant to the room.
    ///
    /// The returned guard issues the matching leave, either explicitly via
    /// [`LeaveGuard::leave`] or when dropped.
    pub async fn join<P>(&self, participant: P) -> Result<LeaveGuard, HubError>
    where
        P: Participant + 'static,
    {
        let id = participant.id();
        self.submit(HubEvent::Join(Box::new(participant))).await?;
        Ok(LeaveGuard::new(self.clone(), id))
    }

    /// Remove a participant. A no-op if it is not (or no longer) a member.
    pub async fn leave(&self, id: ConnectionId) -> Result<(), HubError> {
        self.submit(HubEvent::Leave(id)).await
    }

    /// Submit a message from member `from` for delivery to every member at processing time.
    ///
    /// Dropped by the coordinator if `from` is no longer a member.
    pub async fn forward(&self, from: ConnectionId, message: Message) -> Result<(), HubError> {
        self.submit(HubEvent::Forward { from, message }).await
    }

    /// Current roster, as seen by the coordinator.
    pub async fn roster(&self) -> Result<Vec<String>, HubError> {
        let (reply, response) = oneshot::channel();
        self.submit(HubEvent::Snapshot(reply)).await?;
        response.await.map_err(|_| HubError::Unavailable)
    }

    async fn submit(&self, event: HubEvent) -> Result<(), HubError> {
        self.events
            .send(event)
            .await
            .map_err(|_| HubError::Unavailable)
    }

    /// Submit a leave without awaiting, for use from `Drop`.
    fn leave_detached(&self, id: ConnectionId) {
        match self.events.try_send(HubEvent::Leave(id)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                let events = self.events.clone();
                match tokio::runtime::Handle::try_current() {
                    Ok(runtime) => {
                        runtime.spawn(async move {
                            let _ = events.send(event).await;
                        });
                    }
                    Err(_) => {
                        tracing::error!("No runtime to deliver leave for connection '{}'", id);
                    }
                }
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::debug!("Hub already stopped; dropping leave for '{}'", id);
            }
        }
    }
}
