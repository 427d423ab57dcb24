//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    connection::run_session,
    domain::resolve_identity,
    hub::Hub,
    infrastructure::transport::split,
    ui::state::AppState,
};

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct RoomQuery {
    pub username: Option<String>,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomQuery>,
) -> impl IntoResponse {
    let identity = resolve_identity(query.username.as_deref());
    tracing::info!("New client '{}' is connecting", identity);

    let hub = state.hub.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, hub, identity))
}

async fn handle_socket(socket: WebSocket, hub: Hub, identity: String) {
    let (reader, writer) = split(socket);
    run_session(hub, identity, reader, writer).await;
}
