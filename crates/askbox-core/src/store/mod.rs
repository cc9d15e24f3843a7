//! Session credential storage.

mod credential;
mod memory;

pub use credential::{ACCESS_TOKEN_KEY, CredentialStore, REFRESH_TOKEN_KEY, SessionState};
pub use memory::MemoryStorage;
