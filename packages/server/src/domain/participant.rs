//! Participant trait 定義
//!
//! Hub から見た参加者の能力（identity の参照、配信キューへの投入、クローズ）を
//! 抽象化します。Hub は具体的なトランスポート型に依存せず、テストでは
//! テストダブルに差し替えることができます。

use super::{ConnectionId, DeliveryError, Message};

/// The hub's view of one joined connection.
///
/// Implementations must never block or panic in [`Participant::send`]; the
/// hub calls it from its single coordination loop.
pub trait Participant: Send {
    /// Unique id of the underlying connection
    fn id(&self) -> ConnectionId;

    /// Identity shown in the roster
    fn identity(&self) -> &str;

    /// Mark the participant as joined. Called by the hub when it processes the join.
    fn admit(&mut self);

    /// Enqueue a message for delivery without waiting.
    fn send(&self, message: Message) -> Result<(), DeliveryError>;

    /// Close the delivery queue so the outbound pump drains and stops.
    ///
    /// Must be safe to call more than once.
    fn close(&mut self);
}
