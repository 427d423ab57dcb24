//! WebSocket chat server implementation.

mod config;
mod error;
mod handler;
mod server;
mod signal;
mod state;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::Server;
