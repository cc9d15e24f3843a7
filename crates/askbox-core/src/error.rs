//! Error types for the askbox client.
//!
//! One error type covers transport, server rejection, storage and input
//! validation failures. Server rejections keep the response body exactly as
//! the server sent it.

use std::fmt;
use thiserror::Error;

/// The unified error type for askbox operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("request rejected: {0}")]
    Rejected(#[from] RejectedError),

    /// The credential storage medium failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (bad URL, empty credential, bad route table).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the rejection if the server refused the request.
    pub fn as_rejected(&self) -> Option<&RejectedError> {
        match self {
            Error::Rejected(rejected) => Some(rejected),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// A success response carried a body that could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the server.
///
/// `body` is the server's JSON error payload as received. A body that is not
/// JSON is carried as a JSON string; an empty body is `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedError {
    /// HTTP status code.
    pub status: u16,
    /// Error payload from the server.
    pub body: serde_json::Value,
}

impl RejectedError {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Builds a rejection from a raw response body.
    pub fn from_body(status: u16, raw: &str) -> Self {
        let body = if raw.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
        };
        Self { status, body }
    }

    /// Returns the server's `error` or `message` field, if present.
    pub fn message(&self) -> Option<&str> {
        self.body
            .get("error")
            .or_else(|| self.body.get("message"))
            .and_then(|v| v.as_str())
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl fmt::Display for RejectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        match self.message() {
            Some(message) => write!(f, ": {}", message),
            None if !self.body.is_null() => write!(f, ": {}", self.body),
            None => Ok(()),
        }
    }
}

impl std::error::Error for RejectedError {}

/// Credential storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a key failed.
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// Writing or removing a key failed.
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A credential or sign-in field was empty or malformed.
    #[error("invalid {field}: {reason}")]
    Credential { field: &'static str, reason: String },

    /// Inconsistent route table.
    #[error("invalid route table: {reason}")]
    RouteTable { reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
