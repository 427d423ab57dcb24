//! Participant identity and connection identifiers.

use std::fmt;

use uuid::Uuid;

/// Identity used when the client does not provide one.
pub const ANONYMOUS: &str = "Anonymous";

/// Resolve the identity requested at join time.
///
/// Absent or empty values fall back to [`ANONYMOUS`]. Identities are not
/// required to be unique.
pub fn resolve_identity(requested: Option<&str>) -> String {
    match requested {
        Some(identity) if !identity.is_empty() => identity.to_string(),
        _ => ANONYMOUS.to_string(),
    }
}

/// Identifier of one accepted connection.
///
/// Two participants may share an identity, so membership is keyed on this
/// id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh, random connection id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
