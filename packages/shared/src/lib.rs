//! Helpers shared by the hubbub binaries.

pub mod logger;
