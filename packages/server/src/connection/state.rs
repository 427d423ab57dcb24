//! Connection lifecycle.

use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

/// Lifecycle of one connection.
///
/// `Pending -> Joined -> Leaving -> Closed`. A pending connection that is
/// closed before admission skips straight to `Leaving`. Nothing leaves `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    /// Handshake done, not yet admitted by the hub
    Pending = 0,
    /// Admitted; the hub may deliver to it
    Joined = 1,
    /// Delivery queue closed, outbound pump still draining
    Leaving = 2,
    /// Queue drained or its consumer gone
    Closed = 3,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Joined,
            2 => Self::Leaving,
            _ => Self::Closed,
        }
    }
}

/// State shared by a [`super::Connection`] and its [`super::DeliveryQueue`].
#[derive(Debug, Clone)]
pub(super) struct StateCell(Arc<AtomicU8>);

impl StateCell {
    pub(super) fn new() -> Self {
        Self(Arc::new(AtomicU8::new(ConnectionState::Pending as u8)))
    }

    pub(super) fn load(&self) -> ConnectionState {
        ConnectionState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(super) fn store(&self, state: ConnectionState) {
        self.0.store(state as u8, Ordering::Release);
    }

    /// Move from `from` to `to`; returns `false` if the current state was not `from`.
    pub(super) fn transition(&self, from: ConnectionState, to: ConnectionState) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_cell_starts_pending() {
        // テスト項目: 生成直後の状態は Pending になる
        // given (前提条件):
        let cell = StateCell::new();

        // when (操作):
        let state = cell.load();

        // then (期待する結果):
        assert_eq!(state, ConnectionState::Pending);
    }

    #[test]
    fn test_transition_only_from_expected_state() {
        // テスト項目: 現在の状態が from と一致しない場合は遷移しない
        // given (前提条件):
        let cell = StateCell::new();
        cell.store(ConnectionState::Closed);

        // when (操作):
        let moved = cell.transition(ConnectionState::Leaving, ConnectionState::Closed);
        let reopened = cell.transition(ConnectionState::Pending, ConnectionState::Joined);

        // then (期待する結果):
        assert!(!moved);
        assert!(!reopened);
        assert_eq!(cell.load(), ConnectionState::Closed);
    }
}
