//! Sign-in, sign-up and logout exchanges.

use reqwest::Method;
use tracing::{debug, info, instrument};

use askbox_core::{AuthorizationHeader, Credentials, RefreshToken, Result, SessionTokens, Signup};

use crate::client::{HttpClient, with_authorization};
use crate::endpoints::{LOGOUT, LogoutRequest, SIGNIN, SIGNUP, SigninRequest, SignupRequest};

/// Raw credential exchanges with the auth endpoints.
///
/// Nothing here touches storage; [`SessionClient`](crate::SessionClient)
/// wraps these calls and persists the result. Each call is a single attempt:
/// calling twice creates two server-side attempts.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: HttpClient,
}

impl AuthApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Exchanges a username and password for a new credential pair.
    ///
    /// # Errors
    ///
    /// A non-success response yields [`Error::Rejected`](askbox_core::Error::Rejected)
    /// with the server's error body untouched.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionTokens> {
        credentials.validate()?;
        info!("Signing in");

        let body = SigninRequest {
            username: credentials.username(),
            password: credentials.password(),
        };
        let builder = self.client.request(Method::POST, SIGNIN).json(&body);
        let tokens: SessionTokens = self.client.send_json(builder).await?;

        debug!("Sign-in accepted");
        Ok(tokens)
    }

    /// Registers a new account and returns its first credential pair.
    ///
    /// Username uniqueness and email format are checked by the server and
    /// reported the same way as a failed sign-in.
    #[instrument(skip(self, signup), fields(username = %signup.username()))]
    pub async fn signup(&self, signup: &Signup) -> Result<SessionTokens> {
        signup.validate()?;
        info!("Signing up");

        let body = SignupRequest {
            username: signup.username(),
            email: signup.email(),
            password: signup.password(),
        };
        let builder = self.client.request(Method::POST, SIGNUP).json(&body);
        let tokens: SessionTokens = self.client.send_json(builder).await?;

        debug!("Sign-up accepted");
        Ok(tokens)
    }

    /// Tells the server to end the session behind `refresh_token`.
    ///
    /// The response body is ignored; only the status is checked.
    #[instrument(skip_all)]
    pub async fn logout(
        &self,
        refresh_token: &RefreshToken,
        authorization: Option<&AuthorizationHeader>,
    ) -> Result<()> {
        debug!("Sending logout notice");

        let body = LogoutRequest {
            refresh_token: refresh_token.as_str(),
        };
        let builder = self.client.request(Method::POST, LOGOUT).json(&body);
        let builder = with_authorization(builder, authorization)?;
        self.client.send_no_response(builder).await
    }
}
