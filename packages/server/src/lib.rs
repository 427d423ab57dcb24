//! Single-room WebSocket broadcast chat server.
//!
//! Every message sent by one participant is fanned out to all joined
//! participants, together with a live roster of connected identities. All
//! membership changes and deliveries are serialized through one coordinator
//! task (see [`hub`]); each connection is bridged to it by a pair of pumps
//! (see [`connection`]).

// layers
pub mod connection;
pub mod domain;
pub mod hub;
pub mod infrastructure;
pub mod ui;
