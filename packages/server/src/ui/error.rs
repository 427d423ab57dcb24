//! Server error types.

use thiserror::Error;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server failed while running
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// The hub coordinator stopped; the room can no longer function
    #[error("hub coordinator stopped unexpectedly: {0}")]
    HubStopped(String),
}
