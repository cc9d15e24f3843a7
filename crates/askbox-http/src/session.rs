//! Storage-backed session client.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use askbox_core::{
    CredentialStore, Credentials, Result, SessionState, SessionTokens, Signup, Storage,
};

use crate::auth::AuthApi;
use crate::client::{HttpClient, authorization_value, decode_response, transport};
use crate::config::ClientConfig;
use crate::questions::QuestionsApi;

/// Client whose session lives in a [`Storage`].
///
/// Every request reads the access token from storage at send time, so a
/// login or logout is visible to the very next call.
///
/// # Example
///
/// ```no_run
/// use askbox_core::{Credentials, MemoryStorage};
/// use askbox_http::{ClientConfig, SessionClient};
///
/// # async fn example() -> Result<(), askbox_core::Error> {
/// let client = SessionClient::new(&ClientConfig::default(), MemoryStorage::new())?;
/// client.login(&Credentials::new("alice", "correct horse")).await?;
///
/// let users = client.questions().list_users().await?;
/// println!("{} users", users.len());
///
/// client.logout().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionClient<S> {
    http: HttpClient,
    auth: AuthApi,
    store: CredentialStore<S>,
    logout_timeout: Duration,
}

impl<S: Storage> SessionClient<S> {
    pub fn new(config: &ClientConfig, storage: S) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            auth: AuthApi::new(http.clone()),
            http,
            store: CredentialStore::new(storage),
            logout_timeout: config.logout_timeout,
        })
    }

    pub fn store(&self) -> &CredentialStore<S> {
        &self.store
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn questions(&self) -> QuestionsApi<'_, S> {
        QuestionsApi::new(self)
    }

    /// Current session state, read from storage.
    pub fn session_state(&self) -> Result<SessionState> {
        self.store.session_state()
    }

    /// Signs in and stores the new credentials before returning them.
    ///
    /// Saving here means no caller can observe the gap between the server
    /// answering and the credentials landing in storage.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionTokens> {
        let tokens = self.auth.login(credentials).await?;
        self.store.save_tokens(&tokens)?;
        info!(username = %credentials.username(), "Logged in");
        Ok(tokens)
    }

    /// Signs up and stores the new credentials before returning them.
    pub async fn signup(&self, signup: &Signup) -> Result<SessionTokens> {
        let tokens = self.auth.signup(signup).await?;
        self.store.save_tokens(&tokens)?;
        info!(username = %signup.username(), "Signed up");
        Ok(tokens)
    }

    /// Sends a caller-built request with the current authorization header.
    ///
    /// Caller headers are kept, except that a stored access token replaces
    /// any `Authorization` header the caller set. The response is returned
    /// whatever its status; transport failures are returned unchanged.
    pub async fn authorized_fetch(&self, mut request: Request) -> Result<Response> {
        if let Some(header) = self.store.authorization_header()? {
            request
                .headers_mut()
                .insert(AUTHORIZATION, authorization_value(&header)?);
        }
        self.http.execute(request).await
    }

    /// Builds, authorizes and sends a request, decoding a JSON success body.
    pub async fn fetch_json<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R> {
        let request = builder.build().map_err(transport)?;
        let response = self.authorized_fetch(request).await?;
        decode_response(response).await
    }

    /// Ends the session.
    ///
    /// If a refresh token is stored, the server is told first, waiting at
    /// most the configured logout timeout. Whatever happens to that notice,
    /// both credentials are then removed from storage. Only a failure to
    /// clear storage is returned.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        match self.store.refresh_token() {
            Ok(Some(refresh_token)) => {
                let authorization = self.store.authorization_header().unwrap_or_else(|e| {
                    warn!(error = %e, "Could not read access token for logout notice");
                    None
                });
                let notice = self.auth.logout(&refresh_token, authorization.as_ref());

                match tokio::time::timeout(self.logout_timeout, notice).await {
                    Ok(Ok(())) => debug!("Server session ended"),
                    Ok(Err(e)) => {
                        warn!(error = %e, "Logout notice failed, clearing local session anyway")
                    }
                    Err(_) => warn!(
                        timeout_ms = self.logout_timeout.as_millis() as u64,
                        "Logout notice timed out, clearing local session anyway"
                    ),
                }
            }
            Ok(None) => debug!("No refresh token stored, skipping logout notice"),
            Err(e) => warn!(error = %e, "Could not read refresh token, skipping logout notice"),
        }

        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }
}
