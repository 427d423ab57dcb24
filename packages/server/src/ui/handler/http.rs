//! HTTP endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{HealthDto, RoomSnapshotDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Current roster of the room
pub async fn get_room(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RoomSnapshotDto>, StatusCode> {
    match state.hub.roster().await {
        Ok(connected_users) => Ok(Json(RoomSnapshotDto { connected_users })),
        Err(e) => {
            tracing::error!("Failed to read roster: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
