//! Core traits for credential storage.

mod storage;

pub use storage::Storage;
