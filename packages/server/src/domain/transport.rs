//! Transport traits
//!
//! The bidirectional transport is split into its two halves so the inbound
//! and outbound pumps can own them independently.

use async_trait::async_trait;

use super::{Message, TransportError};

/// Read half of a participant's transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InboundTransport: Send {
    /// Wait for the next text payload.
    ///
    /// Returns [`TransportError::Closed`] once the peer has gone away.
    async fn receive_text(&mut self) -> Result<String, TransportError>;
}

/// Write half of a participant's transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutboundTransport: Send {
    /// Encode and send one message to the peer.
    async fn send_message(&mut self, message: &Message) -> Result<(), TransportError>;

    /// Close the transport.
    async fn close(&mut self) -> Result<(), TransportError>;
}
