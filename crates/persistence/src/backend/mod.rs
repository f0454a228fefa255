// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value storage backends.
//!
//! The persistence adapter only needs synchronous get/set/remove of string
//! blobs under string keys, with no transactional guarantees.
//!
//! - `memory`: a `HashMap`, used by tests and ephemeral sessions
//! - `file`: one `<key>.json` file per key inside a data directory

pub mod file;
pub mod memory;

use crate::error::PersistenceError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Trait for a synchronous key-value store.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Deletes `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// The backend selected at startup.
#[derive(Debug)]
pub enum BackendStore {
    Memory(MemoryStore),
    File(FileStore),
}

impl KeyValueStore for BackendStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match self {
            Self::Memory(store) => store.get(key),
            Self::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        match self {
            Self::Memory(store) => store.set(key, value),
            Self::File(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match self {
            Self::Memory(store) => store.remove(key),
            Self::File(store) => store.remove(key),
        }
    }
}
