//! WebSocket message DTOs.

use serde::{Deserialize, Serialize};

/// Value of the `message_type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Chat,
    UsersList,
}

/// JSON object sent to every client.
///
/// ```json
/// {"username":"alice","message":"hi","message_type":"chat"}
/// {"username":"","message":"","message_type":"users_list","connected_users":["alice","bob"]}
/// ```
///
/// Absent fields default to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMessage {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connected_users: Vec<String>,
}
