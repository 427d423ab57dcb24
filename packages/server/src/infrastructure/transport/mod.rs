//! トランスポートの実装
//!
//! - `websocket`: axum の WebSocket を使った実装

pub mod websocket;

pub use websocket::{WebSocketReader, WebSocketWriter, split};
