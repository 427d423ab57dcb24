//! ドメイン層
//!
//! メッセージモデル、参加者の抽象（`Participant`）、トランスポートの抽象、
//! ロスター構築などの純粋なロジックを定義します。
//! 具体的な実装は Infrastructure 層と connection モジュールが提供します（依存性の逆転）。

mod error;
mod identity;
mod message;
mod participant;
mod roster;
mod transport;

pub use error::{DeliveryError, HubError, TransportError};
pub use identity::{ANONYMOUS, ConnectionId, resolve_identity};
pub use message::{Message, MessageKind};
pub use participant::Participant;
pub use roster::build_roster;
pub use transport::{InboundTransport, OutboundTransport};

#[cfg(test)]
pub use transport::{MockInboundTransport, MockOutboundTransport};
