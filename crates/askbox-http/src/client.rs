//! HTTP client for the askbox API.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use askbox_core::error::{InvalidInputError, RejectedError, TransportError};
use askbox_core::{ApiUrl, AuthorizationHeader, Error, Result};

use crate::config::ClientConfig;

/// Thin wrapper over `reqwest` bound to one server.
///
/// Non-success responses become [`Error::Rejected`] carrying the server's
/// body; connection problems become [`Error::Transport`]. Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl HttpClient {
    /// Create a new client for the configured server.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("askbox/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport)?;

        Ok(Self {
            client,
            base: config.base_url.clone(),
        })
    }

    /// Returns the server this client talks to.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base
    }

    /// Starts a request to an endpoint below the base URL.
    pub fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.client.request(method, self.base.endpoint(segments))
    }

    /// Sends a fully built request and returns the raw response, whatever
    /// its status.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.url().path()))]
    pub async fn execute(&self, request: Request) -> Result<Response> {
        debug!("Sending request");
        let response = self.client.execute(request).await.map_err(transport)?;
        trace!(status = %response.status(), "Response received");
        Ok(response)
    }

    /// Sends a request and decodes a JSON success body.
    pub async fn send_json<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R> {
        let request = builder.build().map_err(transport)?;
        let response = self.execute(request).await?;
        decode_response(response).await
    }

    /// Sends a request and only checks the status.
    pub async fn send_no_response(&self, builder: RequestBuilder) -> Result<()> {
        let request = builder.build().map_err(transport)?;
        let response = self.execute(request).await?;
        check_status(response).await.map(drop)
    }
}

/// Decodes a JSON body from a success response, or turns a non-success
/// response into a rejection. An empty success body decodes as `null`.
pub async fn decode_response<R: DeserializeOwned>(response: Response) -> Result<R> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await.map_err(transport)?;
    let decoded = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(&bytes)
    };
    decoded.map_err(|e| {
        Error::from(TransportError::Decode {
            message: e.to_string(),
        })
    })
}

/// Passes success responses through; reads the body of anything else into a
/// [`RejectedError`].
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await.map_err(transport)?;
    let rejected = RejectedError::from_body(status.as_u16(), &raw);
    debug!(status = status.as_u16(), "Request rejected");
    Err(rejected.into())
}

/// Builds the header value, marked sensitive so `reqwest` and `http` never
/// print it.
pub(crate) fn authorization_value(header: &AuthorizationHeader) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(header.value()).map_err(|_| {
        Error::from(InvalidInputError::Credential {
            field: "access token",
            reason: "contains characters not allowed in a header".to_string(),
        })
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Adds the authorization header when one is given.
pub(crate) fn with_authorization(
    builder: RequestBuilder,
    header: Option<&AuthorizationHeader>,
) -> Result<RequestBuilder> {
    match header {
        Some(header) => Ok(builder.header(AUTHORIZATION, authorization_value(header)?)),
        None => Ok(builder),
    }
}

pub(crate) fn transport(err: reqwest::Error) -> Error {
    let (timeout, connect, decode) = (err.is_timeout(), err.is_connect(), err.is_decode());
    let message = err.without_url().to_string();
    let err = if timeout {
        TransportError::Timeout { message }
    } else if connect {
        TransportError::Connection { message }
    } else if decode {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    err.into()
}
