//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response body of `GET /api/room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshotDto {
    pub connected_users: Vec<String>,
}

/// Response body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
