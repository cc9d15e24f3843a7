//! Persistence of the session credential pair.

use tracing::{debug, warn};

use crate::Result;
use crate::credentials::require_non_empty;
use crate::tokens::{AccessToken, AuthorizationHeader, RefreshToken, SessionTokens};
use crate::traits::Storage;

/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Whether a session currently exists in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}

/// Reads and writes the session credentials in a [`Storage`].
///
/// The store keeps no state of its own; every read goes to storage, so the
/// answer is always what storage currently holds. Both credentials are
/// written and cleared together, and storage holding only one of them reads
/// as [`SessionState::Anonymous`].
///
/// # Example
///
/// ```
/// use askbox_core::{CredentialStore, MemoryStorage, SessionState};
///
/// let store = CredentialStore::new(MemoryStorage::new());
/// store.save("AT1", "RT1").unwrap();
/// assert_eq!(store.session_state().unwrap(), SessionState::Authenticated);
///
/// store.clear().unwrap();
/// assert!(store.authorization_header().unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStore<S> {
    storage: S,
}

impl<S: Storage> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persists a new session, replacing any previous one.
    ///
    /// Both values must be non-empty. If the second write fails the first is
    /// rolled back so storage never holds half a session.
    pub fn save(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        require_non_empty("access token", access_token)?;
        require_non_empty("refresh token", refresh_token)?;

        self.storage.set(ACCESS_TOKEN_KEY, access_token)?;
        if let Err(e) = self.storage.set(REFRESH_TOKEN_KEY, refresh_token) {
            warn!(error = %e, "Failed to store refresh token, rolling back session");
            if let Err(rollback) = self.clear() {
                warn!(error = %rollback, "Rollback of partial session failed");
            }
            return Err(e.into());
        }

        debug!("Session saved");
        Ok(())
    }

    /// Persists a credential pair returned by sign-in or sign-up.
    pub fn save_tokens(&self, tokens: &SessionTokens) -> Result<()> {
        self.save(tokens.access_token.as_str(), tokens.refresh_token.as_str())
    }

    /// Returns the stored access token, if any.
    pub fn access_token(&self) -> Result<Option<AccessToken>> {
        Ok(read_non_empty(&self.storage, ACCESS_TOKEN_KEY)?.map(AccessToken::new))
    }

    /// Returns the stored refresh token, if any.
    pub fn refresh_token(&self) -> Result<Option<RefreshToken>> {
        Ok(read_non_empty(&self.storage, REFRESH_TOKEN_KEY)?.map(RefreshToken::new))
    }

    /// Reports whether a complete session is stored.
    pub fn session_state(&self) -> Result<SessionState> {
        let access = read_non_empty(&self.storage, ACCESS_TOKEN_KEY)?;
        let refresh = read_non_empty(&self.storage, REFRESH_TOKEN_KEY)?;
        Ok(match (access, refresh) {
            (Some(_), Some(_)) => SessionState::Authenticated,
            _ => SessionState::Anonymous,
        })
    }

    /// Returns the bearer header for the stored access token.
    ///
    /// `None` exactly when no access token is stored.
    pub fn authorization_header(&self) -> Result<Option<AuthorizationHeader>> {
        Ok(self.access_token()?.map(|token| token.authorization_header()))
    }

    /// Removes both credentials. Clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<()> {
        let access = self.storage.remove(ACCESS_TOKEN_KEY);
        let refresh = self.storage.remove(REFRESH_TOKEN_KEY);
        access?;
        refresh?;
        debug!("Session cleared");
        Ok(())
    }
}

fn read_non_empty<S: Storage>(storage: &S, key: &str) -> Result<Option<String>> {
    Ok(storage.get(key)?.filter(|value| !value.is_empty()))
}
