//! Error types for the fallible edges of the game: browser storage and
//! configuration parsing. The game loop itself never fails.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// `window.localStorage` is missing or blocked (private mode, sandboxed iframe).
    StorageUnavailable,
    /// A read or write against a storage key was rejected.
    Storage { key: String, reason: String },
    /// Stored or supplied JSON could not be decoded.
    Decode { what: &'static str, reason: String },
    /// A configuration value is outside its usable range.
    InvalidConfig { field: &'static str, reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::StorageUnavailable => write!(f, "local storage is not available"),
            GameError::Storage { key, reason } => {
                write!(f, "storage access to '{}' failed: {}", key, reason)
            }
            GameError::Decode { what, reason } => write!(f, "could not decode {}: {}", what, reason),
            GameError::InvalidConfig { field, reason } => {
                write!(f, "invalid config value '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for GameError {}

pub type GameResult<T> = Result<T, GameError>;
