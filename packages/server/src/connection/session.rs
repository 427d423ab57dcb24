//! One participant's session: join, pump both directions, leave.

use tracing::Instrument;

use crate::{
    domain::{InboundTransport, OutboundTransport, Participant},
    hub::Hub,
};

use super::{Connection, read_pump, write_pump};

/// Run a participant's session to completion.
///
/// 1. Opens a [`Connection`] and joins the hub
/// 2. Spawns the outbound pump
/// 3. Runs the inbound pump on the current task
/// 4. When either pump stops, leaves the hub exactly once
/// 5. Waits for the outbound pump to drain
///
/// If the hub closes the connection first (the peer was evicted as
/// unresponsive, or the hub is shutting down), reading stops at once and the
/// outbound pump is aborted instead of drained, dropping the transport.
#[tracing::instrument(skip_all, fields(identity = %identity))]
pub async fn run_session<R, W>(hub: Hub, identity: String, reader: R, writer: W)
where
    R: InboundTransport,
    W: OutboundTransport + 'static,
{
    let (connection, queue) = Connection::open(identity.clone(), hub.delivery_capacity());
    let connection_id = connection.id();
    let mut close_signal = queue.close_signal();

    let guard = match hub.join(connection).await {
        Ok(guard) => guard,
        Err(e) => {
            tracing::error!("Failed to join '{}' ({}): {}", identity, connection_id, e);
            return;
        }
    };
    tracing::info!("Client '{}' ({}) joined the room", identity, connection_id);

    let outbound_identity = identity.clone();
    let mut outbound = tokio::spawn(
        async move { write_pump(queue, writer, &outbound_identity).await }
            .instrument(tracing::Span::current()),
    );

    // Whichever direction stops first ends the session
    let mut outbound_finished = false;
    let mut closed_by_hub = false;
    tokio::select! {
        result = read_pump(reader, &hub, connection_id, &identity) => {
            if let Err(e) = result {
                tracing::error!("Inbound pump for '{}' stopped: {}", identity, e);
            }
        }
        _ = &mut outbound => {
            outbound_finished = true;
            tracing::debug!("Outbound pump for '{}' stopped first", identity);
        }
        _ = close_signal.closed() => {
            closed_by_hub = true;
            tracing::info!("Hub closed the connection for '{}' ({})", identity, connection_id);
        }
    }

    // A no-op at the hub if it already removed this connection
    if let Err(e) = guard.leave().await {
        tracing::warn!("Failed to leave for '{}' ({}): {}", identity, connection_id, e);
    }

    if closed_by_hub {
        outbound.abort();
    } else if !outbound_finished {
        if let Err(e) = outbound.await {
            tracing::warn!("Outbound pump for '{}' panicked: {}", identity, e);
        }
    }

    tracing::info!("Client '{}' ({}) disconnected", identity, connection_id);
}
