//! askbox-core - session credentials and route access control for the askbox client.

pub mod credentials;
pub mod error;
pub mod guard;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::{Credentials, Signup};
pub use error::Error;
pub use guard::{NavigationGuard, NavigationOutcome, NavigationRequest, decide};
pub use store::{CredentialStore, MemoryStorage, SessionState};
pub use tokens::{AccessToken, AuthorizationHeader, RefreshToken, SessionTokens};
pub use traits::Storage;
pub use types::{ApiUrl, Route, RouteAccess, RouteTable};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
