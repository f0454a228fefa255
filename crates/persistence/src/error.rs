// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during persistence operations.
///
/// These never reach the schedule store: the load helpers recover from them
/// and the save helpers log and drop them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Reading or writing the backing storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// The key cannot be used by this backend.
    #[error("Invalid key '{0}'")]
    InvalidKey(String),
    /// Initialization error.
    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
