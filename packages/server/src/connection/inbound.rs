//! Inbound pump: transport -> hub.

use crate::{
    domain::{ConnectionId, HubError, InboundTransport, Message, TransportError},
    hub::Hub,
};

/// Forward every payload received on `transport` to the hub as a chat message
/// from connection `id`.
///
/// Returns once the transport fails or closes; that is an ordinary
/// disconnect and yields `Ok(())`. The caller owns the matching leave.
///
/// # Errors
///
/// Returns [`HubError::Unavailable`] if the hub stopped accepting events.
pub async fn read_pump<T>(
    mut transport: T,
    hub: &Hub,
    id: ConnectionId,
    identity: &str,
) -> Result<(), HubError>
where
    T: InboundTransport,
{
    loop {
        let payload = match transport.receive_text().await {
            Ok(payload) => payload,
            Err(TransportError::Closed) => {
                tracing::debug!("Client '{}' closed the connection", identity);
                return Ok(());
            }
            Err(e) => {
                tracing::info!("Client '{}' read error: {}", identity, e);
                return Ok(());
            }
        };

        tracing::debug!("Received {} byte(s) from '{}'", payload.len(), identity);
        hub.forward(id, Message::chat(identity, payload)).await?;
    }
}
