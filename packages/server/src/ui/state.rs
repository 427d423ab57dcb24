//! Shared application state.

use crate::hub::Hub;

/// Shared application state
pub struct AppState {
    /// Handle to the room's coordinator
    pub hub: Hub,
}
