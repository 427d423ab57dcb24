//! Infrastructure 層
//!
//! - `dto`: ワイヤーフォーマット（JSON）の DTO とドメインモデルとの変換
//! - `transport`: ドメインのトランスポート trait の WebSocket 実装

pub mod dto;
pub mod transport;
