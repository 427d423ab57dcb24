//! Messages fanned out by the hub.

/// Kind of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Chat,
    Roster,
}

/// An immutable envelope delivered to participants.
///
/// A chat message carries a sender and an opaque body; a roster message
/// carries the sorted identities of every joined connection. The hub clones
/// a fresh copy for each recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Chat payload sent by one participant
    Chat { sender: String, body: String },
    /// Snapshot of the identities currently in the room
    Roster(Vec<String>),
}

impl Message {
    pub fn chat(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Chat {
            sender: sender.into(),
            body: body.into(),
        }
    }

    pub fn roster(identities: Vec<String>) -> Self {
        Self::Roster(identities)
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Chat { .. } => MessageKind::Chat,
            Self::Roster(_) => MessageKind::Roster,
        }
    }

    /// Sender identity; empty for system (roster) messages.
    pub fn sender(&self) -> &str {
        match self {
            Self::Chat { sender, .. } => sender,
            Self::Roster(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_kind_and_sender() {
        // テスト項目: チャットメッセージは送信者を保持し kind が Chat になる
        // given (前提条件):
        let message = Message::chat("alice", "hi");

        // when (操作):
        let kind = message.kind();

        // then (期待する結果):
        assert_eq!(kind, MessageKind::Chat);
        assert_eq!(message.sender(), "alice");
    }

    #[test]
    fn test_roster_message_has_empty_sender() {
        // テスト項目: ロスターメッセージはシステムメッセージなので送信者が空になる
        // given (前提条件):
        let message = Message::roster(vec!["alice".to_string()]);

        // when (操作):
        let sender = message.sender();

        // then (期待する結果):
        assert_eq!(sender, "");
        assert_eq!(message.kind(), MessageKind::Roster);
    }
}
