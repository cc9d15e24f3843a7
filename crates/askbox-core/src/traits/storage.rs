//! Key/value storage trait.

use std::sync::Arc;

use crate::error::StorageError;

/// Durable client-side key/value storage holding the session credentials.
///
/// Calls are synchronous. Implementations use interior mutability so a store
/// can be shared the way browser local storage is.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
