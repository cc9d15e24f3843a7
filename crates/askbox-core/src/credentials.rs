//! Sign-in and sign-up request types.

use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;

/// Username and password for sign-in.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use askbox_core::Credentials;
///
/// let creds = Credentials::new("alice", "correct horse");
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Rejects empty fields before anything is sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Account details for sign-up.
#[derive(Clone)]
pub struct Signup {
    credentials: Credentials,
    email: String,
}

impl Signup {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            email: email.into(),
        }
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    /// Rejects empty fields. Uniqueness and format checks are the server's job.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("username", self.credentials.username())?;
        require_non_empty("email", &self.email)?;
        require_non_empty("password", self.credentials.password())
    }
}

impl fmt::Debug for Signup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signup")
            .field("username", &self.credentials.username())
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(InvalidInputError::Credential {
            field,
            reason: "must not be empty".to_string(),
        }
        .into());
    }
    Ok(())
}
