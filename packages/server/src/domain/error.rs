//! Domain error types.

use thiserror::Error;

/// Failure to enqueue a message into a connection's delivery queue.
///
/// The hub treats every variant as an unresponsive participant and evicts it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The delivery queue has no free slot
    #[error("delivery queue is full")]
    Full,

    /// The delivery queue was closed, either by the hub or because the outbound pump stopped
    #[error("delivery queue is closed")]
    Closed,

    /// The connection has not been admitted by the hub yet
    #[error("connection has not joined the room")]
    NotJoined,
}

/// Transport-level failure. Always treated as a disconnect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The peer closed the connection, or the stream ended
    #[error("transport closed")]
    Closed,

    /// Reading from or writing to the transport failed
    #[error("transport I/O failed: {0}")]
    Io(String),

    /// The message could not be encoded for the wire
    #[error("failed to encode message: {0}")]
    Encode(String),
}

/// The hub's coordination loop is no longer accepting events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    /// The coordinator has stopped, or the reply was dropped before it answered
    #[error("hub coordinator is not running")]
    Unavailable,
}
