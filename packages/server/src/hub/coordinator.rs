//! The hub's coordination loop.

use std::collections::HashMap;

use tokio::sync::mpsc;

use crate::domain::{ConnectionId, Message, Participant, build_roster};

use super::event::HubEvent;

/// Owns the membership map and processes hub events one at a time.
///
/// Delivery never waits: a member whose queue is full (or already closed)
/// is treated as unresponsive and evicted, so one slow reader cannot stall
/// fan-out to everyone else.
pub struct Coordinator {
    events: mpsc::Receiver<HubEvent>,
    members: HashMap<ConnectionId, Box<dyn Participant>>,
}

impl Coordinator {
    pub(super) fn new(events: mpsc::Receiver<HubEvent>) -> Self {
        Self {
            events,
            members: HashMap::new(),
        }
    }

    /// Process events until every [`super::Hub`] handle has been dropped.
    ///
    /// Remaining members have their queues closed on exit.
    pub async fn run(mut self) {
        tracing::info!("Hub coordinator started");

        while let Some(event) = self.events.recv().await {
            self.handle(event);
        }

        self.close_all();
        tracing::info!("Hub coordinator stopped");
    }

    fn handle(&mut self, event: HubEvent) {
        match event {
            HubEvent::Join(participant) => self.join(participant),
            HubEvent::Leave(id) => self.leave(id),
            HubEvent::Forward { from, message } => self.forward(from, message),
            HubEvent::Snapshot(reply) => {
                // The requester may have given up waiting.
                let _ = reply.send(self.roster());
            }
        }
    }

    fn join(&mut self, mut participant: Box<dyn Participant>) {
        participant.admit();
        tracing::info!(
            "Participant '{}' ({}) joined, {} member(s)",
            participant.identity(),
            participant.id(),
            self.members.len() + 1
        );
        self.members.insert(participant.id(), participant);
        self.broadcast_roster();
    }

    fn leave(&mut self, id: ConnectionId) {
        if self.remove(id) {
            self.broadcast_roster();
        } else {
            tracing::debug!("Connection '{}' is not a member, ignoring leave", id);
        }
    }

    fn forward(&mut self, from: ConnectionId, message: Message) {
        // A connection that was evicted may still have forwards in flight
        if !self.members.contains_key(&from) {
            tracing::debug!("Dropping message from non-member '{}' ({})", message.sender(), from);
            return;
        }

        tracing::debug!(
            "Forwarding message from '{}' to {} member(s)",
            message.sender(),
            self.members.len()
        );
        let unresponsive = self.fan_out(&message);
        if !unresponsive.is_empty() {
            self.evict(unresponsive);
        }
    }

    /// Send the full, sorted roster to every member.
    ///
    /// Evicting a member changes the roster, so this repeats until a
    /// broadcast reaches everyone still joined.
    fn broadcast_roster(&mut self) {
        loop {
            let roster = Message::roster(self.roster());
            let unresponsive = self.fan_out(&roster);
            if unresponsive.is_empty() {
                return;
            }
            for id in unresponsive {
                self.remove(id);
            }
        }
    }

    /// Deliver a copy of `message` to every member; returns the ids that could not take it.
    fn fan_out(&self, message: &Message) -> Vec<ConnectionId> {
        self.members
            .values()
            .filter_map(|member| match member.send(message.clone()) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(
                        "Failed to deliver to '{}' ({}): {}",
                        member.identity(),
                        member.id(),
                        e
                    );
                    Some(member.id())
                }
            })
            .collect()
    }

    fn evict(&mut self, ids: Vec<ConnectionId>) {
        for id in ids {
            tracing::warn!("Evicting unresponsive connection '{}'", id);
            self.remove(id);
        }
        self.broadcast_roster();
    }

    /// Remove a member and close its queue. Returns `false` if it was not a member.
    fn remove(&mut self, id: ConnectionId) -> bool {
        match self.members.remove(&id) {
            Some(mut member) => {
                member.close();
                tracing::info!(
                    "Participant '{}' ({}) left, {} member(s)",
                    member.identity(),
                    id,
                    self.members.len()
                );
                true
            }
            None => false,
        }
    }

    fn roster(&self) -> Vec<String> {
        build_roster(self.members.values().map(|member| member.identity()))
    }

    fn close_all(&mut self) {
        for (_, mut member) in self.members.drain() {
            member.close();
        }
    }
}
