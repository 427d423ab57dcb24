//! Per-connection plumbing between a transport and the hub.
//!
//! - `delivery`: the hub-side [`Connection`] and its private [`DeliveryQueue`]
//! - `inbound` / `outbound`: the pump pair
//! - `session`: joins, runs both pumps, and guarantees the leave

mod delivery;
mod inbound;
mod outbound;
mod session;
mod state;

pub use delivery::{CloseSignal, Connection, DeliveryQueue};
pub use inbound::read_pump;
pub use outbound::write_pump;
pub use session::run_session;
pub use state::ConnectionState;
