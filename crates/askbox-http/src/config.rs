//! Client configuration.

use std::time::Duration;

use askbox_core::ApiUrl;

/// How long logout waits for the server before clearing the local session.
pub const DEFAULT_LOGOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for [`HttpClient`](crate::HttpClient) and
/// [`SessionClient`](crate::SessionClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use askbox_core::ApiUrl;
/// use askbox_http::ClientConfig;
///
/// let config = ClientConfig::new(ApiUrl::new("https://askbox.example").unwrap())
///     .with_logout_timeout(Duration::from_secs(2));
/// assert_eq!(config.logout_timeout, Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root; endpoints live below `/api`.
    pub base_url: ApiUrl,
    /// Upper bound on the best-effort server notice sent by logout.
    pub logout_timeout: Duration,
    /// Overall timeout applied to every other request. `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_logout_timeout(mut self, timeout: Duration) -> Self {
        self.logout_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            logout_timeout: DEFAULT_LOGOUT_TIMEOUT,
            request_timeout: None,
        }
    }
}
