//! Single-room WebSocket chat server with broadcast functionality.
//!
//! Every message a client sends is broadcast to all connected clients, along
//! with the list of connected usernames.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hubbub-server
//! cargo run --bin hubbub-server -- --host 0.0.0.0 --port 3000 --static-dir ./static
//! ```

use std::path::PathBuf;

use clap::Parser;
use hubbub_server::{
    hub::{DEFAULT_DELIVERY_CAPACITY, HubConfig},
    ui::{Server, ServerConfig},
};
use hubbub_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hubbub-server")]
#[command(about = "Single-room WebSocket chat server with broadcast support", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Directory of static files served at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Messages buffered per client before it is disconnected as unresponsive
    #[arg(long, default_value_t = DEFAULT_DELIVERY_CAPACITY)]
    queue_capacity: usize,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            hub: HubConfig {
                delivery_capacity: args.queue_capacity,
                ..HubConfig::default()
            },
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_CRATE_NAME"), "tower_http"], "debug");

    let args = Args::parse();

    let server = Server::new(ServerConfig::from(args));
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
