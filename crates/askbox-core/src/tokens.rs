//! Session credential types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An access token for authenticated requests.
///
/// Short-lived and opaque; the server decides what it means.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the bearer authorization header for this token.
    pub fn authorization_header(&self) -> AuthorizationHeader {
        AuthorizationHeader(format!("Bearer {}", self.0))
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token.
///
/// Longer-lived than the access token. The client only uses it to end the
/// session on the server at logout.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// The credential pair issued by sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    #[serde(alias = "accessCredential")]
    pub access_token: AccessToken,
    #[serde(alias = "refreshCredential")]
    pub refresh_token: RefreshToken,
}

/// Value of an `Authorization: Bearer <token>` header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationHeader(String);

impl AuthorizationHeader {
    /// Header name, lowercase as HTTP/2 requires.
    pub const NAME: &'static str = "authorization";

    /// Returns the full header value, including the `Bearer ` scheme.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthorizationHeader")
            .field(&"Bearer [REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn refresh_token_hides_value_in_debug() {
        let token = RefreshToken::new("refresh_token_value_here");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("refresh_token_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn authorization_header_is_bearer_scheme() {
        let header = AccessToken::new("AT1").authorization_header();
        assert_eq!(header.value(), "Bearer AT1");
        assert!(!format!("{:?}", header).contains("AT1"));
    }

    #[test]
    fn session_tokens_accept_both_wire_spellings() {
        let tokens: SessionTokens =
            serde_json::from_str(r#"{"accessToken":"AT1","refreshToken":"RT1"}"#).unwrap();
        assert_eq!(tokens.access_token.as_str(), "AT1");
        assert_eq!(tokens.refresh_token.as_str(), "RT1");

        let tokens: SessionTokens =
            serde_json::from_str(r#"{"accessCredential":"AT2","refreshCredential":"RT2"}"#)
                .unwrap();
        assert_eq!(tokens.access_token.as_str(), "AT2");
        assert_eq!(tokens.refresh_token.as_str(), "RT2");
    }
}
