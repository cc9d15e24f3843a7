//! Core askbox types.
//!
//! These types enforce their invariants at construction time.

mod api_url;
mod route;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use route::{Route, RouteAccess, RouteTable};
