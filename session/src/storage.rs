//! Durable key-value storage boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `window.localStorage`; natively and in tests it is
//! [`MemoryStorage`]. Values are plain strings: the user record is stored as
//! JSON under [`USER_KEY`] and the raw token under [`TOKEN_KEY`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Storage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";
/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Error returned by a [`Storage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or does not exist in this environment.
    #[error("durable storage unavailable")]
    Unavailable,
    /// A write or delete was refused (quota exceeded, private mode, ...).
    #[error("failed to write storage key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String-valued key-value store that survives a page reload.
pub trait Storage {
    /// Read `key`. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend refuses the delete.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage used by native builds and tests.
///
/// [`MemoryStorage::set_available`] switches it into a mode where every call
/// fails with [`StorageError::Unavailable`], mimicking disabled storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with existing entries, e.g. from a previous "process".
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            unavailable: false,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.remove(key);
        Ok(())
    }
}
