//! Outbound pump: delivery queue -> transport.

use crate::domain::OutboundTransport;

use super::DeliveryQueue;

/// Write every queued message to `transport`, in order.
///
/// Stops at the first write error. When the hub closes the queue, the
/// remaining messages are written and the transport is closed. Stopping does
/// not by itself make the connection leave.
pub async fn write_pump<T>(mut queue: DeliveryQueue, mut transport: T, identity: &str)
where
    T: OutboundTransport,
{
    while let Some(message) = queue.recv().await {
        if let Err(e) = transport.send_message(&message).await {
            tracing::info!("Client '{}' write error: {}", identity, e);
            return;
        }
    }

    tracing::debug!("Delivery queue for '{}' closed and drained", identity);
    if let Err(e) = transport.close().await {
        tracing::debug!("Failed to close transport for '{}': {}", identity, e);
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::{
        connection::Connection,
        domain::{Message, MockOutboundTransport, Participant, TransportError},
    };

    #[tokio::test]
    async fn test_write_pump_writes_in_order_then_closes() {
        // テスト項目: キューのメッセージを順番通り書き込み、キューが閉じたらトランスポートを閉じる
        // given (前提条件):
        let (mut connection, queue) = Connection::open("alice", 8);
        connection.admit();
        connection.send(Message::chat("bob", "one")).unwrap();
        connection.send(Message::chat("bob", "two")).unwrap();
        connection.close();

        let mut transport = MockOutboundTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send_message()
            .with(eq(Message::chat("bob", "one")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        transport
            .expect_send_message()
            .with(eq(Message::chat("bob", "two")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        transport
            .expect_close()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        // when (操作):
        write_pump(queue, transport, "alice").await;

        // then (期待する結果):
        // expectations are verified when the mock is dropped
    }

    #[tokio::test]
    async fn test_write_pump_stops_on_write_error() {
        // テスト項目: 書き込みエラーが発生したら以降のメッセージは書き込まずに終了する
        // given (前提条件):
        let (mut connection, queue) = Connection::open("alice", 8);
        connection.admit();
        connection.send(Message::chat("bob", "one")).unwrap();
        connection.send(Message::chat("bob", "two")).unwrap();

        let mut transport = MockOutboundTransport::new();
        transport
            .expect_send_message()
            .times(1)
            .returning(|_| Err(TransportError::Io("broken pipe".to_string())));
        transport.expect_close().never();

        // when (操作):
        write_pump(queue, transport, "alice").await;

        // then (期待する結果):
        // the pump returned even though the queue is still open
        assert_eq!(
            connection.send(Message::chat("bob", "three")),
            Err(crate::domain::DeliveryError::Closed)
        );
    }
}
