//! askbox-http - HTTP-backed session client for the askbox API.
//!
//! [`SessionClient`] ties a [`Storage`](askbox_core::Storage) to the server:
//! it signs in and out, keeps the credential pair in storage, and attaches
//! the bearer token to outgoing requests.

mod auth;
mod client;
mod config;
mod endpoints;
mod models;
mod questions;
mod session;

pub use auth::AuthApi;
pub use client::{HttpClient, check_status, decode_response};
pub use config::{ClientConfig, DEFAULT_LOGOUT_TIMEOUT};
pub use models::{Question, User};
pub use questions::QuestionsApi;
pub use session::SessionClient;

pub use reqwest::{Method, Request, RequestBuilder, Response, StatusCode};
