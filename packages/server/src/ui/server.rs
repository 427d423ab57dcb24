//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::hub::Hub;

use super::{
    config::ServerConfig,
    error::ServerError,
    handler::{get_room, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// Owns the room's hub: the coordinator is started by [`Server::serve`] and
/// lives as long as the server does.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(ServerConfig::default());
/// server.run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new Server instance
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind to the configured address and serve until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind, if serving fails, or if
    /// the hub coordinator stops.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!("Press Ctrl+C to shutdown gracefully");
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::HubStopped`] if the coordinator ends while the
    /// server is running. The hub is the room's single authority, so there is
    /// nothing to fall back to.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (hub, coordinator) = Hub::new(self.config.hub);
        let mut coordinator = tokio::spawn(coordinator.run());
        let app = self.router(hub);

        let local_addr = listener.local_addr()?;
        tracing::info!("WebSocket chat server listening on {}", local_addr);
        tracing::info!("Connect to: ws://{}/room?username=<name>", local_addr);
        if let Some(dir) = &self.config.static_dir {
            tracing::info!("Serving static files from {}", dir.display());
        }

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .into_future();

        tokio::select! {
            result = server => result?,
            joined = &mut coordinator => {
                let reason = match joined {
                    Ok(()) => "coordinator returned".to_string(),
                    Err(e) => e.to_string(),
                };
                tracing::error!("Hub coordinator stopped: {}", reason);
                return Err(ServerError::HubStopped(reason));
            }
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn router(&self, hub: Hub) -> Router {
        let app_state = Arc::new(AppState { hub });

        let router = Router::new()
            // WebSocket エンドポイント
            .route("/room", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/room", get(get_room));

        let router = match &self.config.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router,
        };

        router
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }
}
