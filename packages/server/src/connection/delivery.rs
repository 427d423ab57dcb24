//! Hub-side connection handle and its delivery queue.

use tokio::sync::{
    mpsc::{self, error::TrySendError},
    watch,
};

use crate::domain::{ConnectionId, DeliveryError, Message, Participant};

use super::state::{ConnectionState, StateCell};

/// One participant as seen by the hub.
///
/// Holds the sending side of the participant's bounded delivery queue. The
/// transport itself stays with the pumps; the hub never touches it.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    identity: String,
    sender: Option<mpsc::Sender<Message>>,
    state: StateCell,
    closed: watch::Sender<bool>,
}

/// Receiving side of a connection's delivery queue, drained by the outbound pump.
#[derive(Debug)]
pub struct DeliveryQueue {
    receiver: mpsc::Receiver<Message>,
    state: StateCell,
    closed: watch::Receiver<bool>,
}

/// Resolves once the hub has closed a connection.
///
/// Lets the session stop reading from a peer the hub has already removed,
/// without waiting for the outbound pump to drain.
#[derive(Debug, Clone)]
pub struct CloseSignal {
    closed: watch::Receiver<bool>,
}

impl Connection {
    /// Create a pending connection with a delivery queue of `capacity` slots.
    pub fn open(identity: impl Into<String>, capacity: usize) -> (Self, DeliveryQueue) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let state = StateCell::new();
        let (closed, closed_rx) = watch::channel(false);
        let connection = Self {
            id: ConnectionId::generate(),
            identity: identity.into(),
            sender: Some(sender),
            state: state.clone(),
            closed,
        };
        let queue = DeliveryQueue {
            receiver,
            state,
            closed: closed_rx,
        };
        (connection, queue)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ConnectionState {
        self.state.load()
    }
}

impl Participant for Connection {
    fn id(&self) -> ConnectionId {
        self.id
    }

    fn identity(&self) -> &str {
        &self.identity
    }

    fn admit(&mut self) {
        self.state
            .transition(ConnectionState::Pending, ConnectionState::Joined);
    }

    fn send(&self, message: Message) -> Result<(), DeliveryError> {
        match self.state.load() {
            ConnectionState::Pending => return Err(DeliveryError::NotJoined),
            ConnectionState::Leaving | ConnectionState::Closed => {
                return Err(DeliveryError::Closed);
            }
            ConnectionState::Joined => {}
        }

        let sender = self.sender.as_ref().ok_or(DeliveryError::Closed)?;
        sender.try_send(message).map_err(|error| match error {
            TrySendError::Full(_) => DeliveryError::Full,
            TrySendError::Closed(_) => DeliveryError::Closed,
        })
    }

    fn close(&mut self) {
        let Some(sender) = self.sender.take() else {
            return;
        };

        self.state.store(ConnectionState::Leaving);
        self.closed.send_replace(true);
        let consumer_gone = sender.is_closed();
        drop(sender);
        if consumer_gone {
            self.state
                .transition(ConnectionState::Leaving, ConnectionState::Closed);
        }
    }
}

impl DeliveryQueue {
    /// Wait for the next message.
    ///
    /// Returns `None` once the connection was closed and every queued
    /// message has been received.
    pub async fn recv(&mut self) -> Option<Message> {
        let message = self.receiver.recv().await;
        if message.is_none() {
            self.state
                .transition(ConnectionState::Leaving, ConnectionState::Closed);
        }
        message
    }

    /// Signal that resolves when the hub closes this connection.
    pub fn close_signal(&self) -> CloseSignal {
        CloseSignal {
            closed: self.closed.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ConnectionState {
        self.state.load()
    }

    /// Take the next message if one is already queued.
    #[cfg(test)]
    pub(crate) fn try_recv(&mut self) -> Option<Message> {
        self.receiver.try_recv().ok()
    }
}

impl CloseSignal {
    /// Wait until the connection is closed.
    ///
    /// Also resolves if the hub dropped the connection without closing it,
    /// which happens when the coordinator is gone.
    pub async fn closed(&mut self) {
        let _ = self.closed.wait_for(|closed| *closed).await;
    }
}

impl Drop for DeliveryQueue {
    fn drop(&mut self) {
        self.state
            .transition(ConnectionState::Leaving, ConnectionState::Closed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_before_admit_is_rejected() {
        // テスト項目: Hub に参加する前の接続への送信は NotJoined で拒否される
        // given (前提条件):
        let (connection, _queue) = Connection::open("alice", 4);

        // when (操作):
        let result = connection.send(Message::chat("bob", "hi"));

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::NotJoined));
        assert_eq!(connection.state(), ConnectionState::Pending);
    }

    #[tokio::test]
    async fn test_send_after_admit_is_delivered_in_order() {
        // テスト項目: 参加後に送信したメッセージが FIFO で配信キューに届く
        // given (前提条件):
        let (mut connection, mut queue) = Connection::open("alice", 4);
        connection.admit();

        // when (操作):
        connection.send(Message::chat("bob", "first")).unwrap();
        connection.send(Message::chat("bob", "second")).unwrap();

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Joined);
        assert_eq!(queue.recv().await, Some(Message::chat("bob", "first")));
        assert_eq!(queue.recv().await, Some(Message::chat("bob", "second")));
    }

    #[test]
    fn test_send_to_full_queue_returns_full() {
        // テスト項目: 配信キューが満杯の場合は Full が返され、ブロックしない
        // given (前提条件):
        let (mut connection, _queue) = Connection::open("alice", 1);
        connection.admit();
        connection.send(Message::chat("bob", "first")).unwrap();

        // when (操作):
        let result = connection.send(Message::chat("bob", "second"));

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::Full));
    }

    #[tokio::test]
    async fn test_close_drains_then_ends_queue() {
        // テスト項目: close 後もキュー内のメッセージは取り出せ、その後 None で終了する
        // given (前提条件):
        let (mut connection, mut queue) = Connection::open("alice", 4);
        connection.admit();
        connection.send(Message::chat("bob", "pending")).unwrap();

        // when (操作):
        connection.close();

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Leaving);
        assert_eq!(queue.recv().await, Some(Message::chat("bob", "pending")));
        assert_eq!(queue.recv().await, None);
        assert_eq!(queue.state(), ConnectionState::Closed);
    }

    #[tokio::test]
    async fn test_close_fires_close_signal() {
        // テスト項目: close を呼ぶと CloseSignal が解決する
        // given (前提条件):
        let (mut connection, queue) = Connection::open("alice", 4);
        connection.admit();
        let mut signal = queue.close_signal();

        // when (操作):
        connection.close();

        // then (期待する結果):
        let result =
            tokio::time::timeout(std::time::Duration::from_secs(1), signal.closed()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_close_signal_pending_while_joined() {
        // テスト項目: 参加中の接続では CloseSignal は解決しない
        // given (前提条件):
        let (mut connection, queue) = Connection::open("alice", 4);
        connection.admit();
        let mut signal = queue.close_signal();

        // when (操作):
        let result =
            tokio::time::timeout(std::time::Duration::from_millis(50), signal.closed()).await;

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(connection.state(), ConnectionState::Joined);
    }

    #[test]
    fn test_close_twice_is_safe() {
        // テスト項目: close を二回呼んでもパニックせず、送信は Closed で拒否される
        // given (前提条件):
        let (mut connection, _queue) = Connection::open("alice", 4);
        connection.admit();

        // when (操作):
        connection.close();
        connection.close();
        let result = connection.send(Message::chat("bob", "late"));

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::Closed));
    }

    #[test]
    fn test_close_after_consumer_dropped_is_closed() {
        // テスト項目: 受信側が既に破棄されている場合、close で直ちに Closed になる
        // given (前提条件):
        let (mut connection, queue) = Connection::open("alice", 4);
        connection.admit();
        drop(queue);

        // when (操作):
        connection.close();

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Closed);
    }

    #[test]
    fn test_send_after_consumer_dropped_returns_closed() {
        // テスト項目: 送出ポンプが終了して受信側が無い場合、送信は Closed を返す
        // given (前提条件):
        let (mut connection, queue) = Connection::open("alice", 4);
        connection.admit();
        drop(queue);

        // when (操作):
        let result = connection.send(Message::chat("bob", "hi"));

        // then (期待する結果):
        assert_eq!(result, Err(DeliveryError::Closed));
    }
}
