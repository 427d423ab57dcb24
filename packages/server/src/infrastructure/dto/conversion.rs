//! Conversions between DTOs and domain models.

use crate::domain::Message;

use super::websocket::{MessageType, RoomMessage};

impl From<Message> for RoomMessage {
    fn from(message: Message) -> Self {
        match message {
            Message::Chat { sender, body } => Self {
                username: sender,
                message: body,
                message_type: MessageType::Chat,
                connected_users: Vec::new(),
            },
            Message::Roster(identities) => Self {
                username: String::new(),
                message: String::new(),
                message_type: MessageType::UsersList,
                connected_users: identities,
            },
        }
    }
}

impl From<RoomMessage> for Message {
    fn from(dto: RoomMessage) -> Self {
        match dto.message_type {
            MessageType::Chat => Message::chat(dto.username, dto.message),
            MessageType::UsersList => Message::roster(dto.connected_users),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_chat_message_to_dto() {
        // テスト項目: ドメインのチャットメッセージが DTO に変換される
        // given (前提条件):
        let message = Message::chat("alice", "hi");

        // when (操作):
        let dto = RoomMessage::from(message);

        // then (期待する結果):
        assert_eq!(dto.username, "alice");
        assert_eq!(dto.message, "hi");
        assert_eq!(dto.message_type, MessageType::Chat);
        assert!(dto.connected_users.is_empty());
    }

    #[test]
    fn test_domain_roster_to_dto() {
        // テスト項目: ドメインのロスターが users_list の DTO に変換される
        // given (前提条件):
        let message = Message::roster(vec!["alice".to_string(), "bob".to_string()]);

        // when (操作):
        let dto = RoomMessage::from(message);

        // then (期待する結果):
        assert_eq!(dto.username, "");
        assert_eq!(dto.message_type, MessageType::UsersList);
        assert_eq!(dto.connected_users, vec!["alice", "bob"]);
    }

    #[test]
    fn test_dto_users_list_to_domain() {
        // テスト項目: users_list の DTO がドメインのロスターに変換される
        // given (前提条件):
        let dto = RoomMessage {
            message_type: MessageType::UsersList,
            connected_users: vec!["alice".to_string()],
            ..RoomMessage::default()
        };

        // when (操作):
        let message = Message::from(dto);

        // then (期待する結果):
        assert_eq!(message, Message::roster(vec!["alice".to_string()]));
    }
}
