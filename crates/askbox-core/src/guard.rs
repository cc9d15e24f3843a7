//! Route access control.
//!
//! [`decide`] is the whole policy: a pure function of the route table, the
//! target route and the session state. [`NavigationGuard`] feeds it the
//! session state read fresh from a [`CredentialStore`] on every navigation,
//! so whatever routing mechanism sits on top only has to call
//! [`NavigationGuard::navigate`] before switching views.

use std::fmt;

use tracing::{debug, instrument, warn};

use crate::store::{CredentialStore, SessionState};
use crate::traits::Storage;
use crate::types::{RouteAccess, RouteTable};

/// Result of a navigation attempt. There is no "denied" outcome; every
/// decision names a route to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationOutcome {
    /// Proceed to the requested route unchanged.
    Allow(String),
    /// Go to this route instead.
    Redirect(String),
}

impl NavigationOutcome {
    /// Name of the route that ends up displayed.
    pub fn route(&self) -> &str {
        match self {
            NavigationOutcome::Allow(route) | NavigationOutcome::Redirect(route) => route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, NavigationOutcome::Redirect(_))
    }
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationOutcome::Allow(route) => write!(f, "allow {}", route),
            NavigationOutcome::Redirect(route) => write!(f, "redirect {}", route),
        }
    }
}

/// A navigation attempt from one route to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Route name being entered.
    pub target: String,
    /// Route being left, if known. Only recorded for context.
    pub from: Option<String>,
}

impl NavigationRequest {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            from: None,
        }
    }

    pub fn from_route(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

/// Decides where a navigation to `target` ends up.
///
/// Rules, first match wins:
/// 1. private target while anonymous: redirect to the login route;
/// 2. auth-only target while authenticated: redirect to the landing route;
/// 3. otherwise allow the target.
pub fn decide(table: &RouteTable, target: &str, state: SessionState) -> NavigationOutcome {
    match (table.access(target), state) {
        (RouteAccess::Private, SessionState::Anonymous) => {
            NavigationOutcome::Redirect(table.login_route().to_string())
        }
        (RouteAccess::AuthOnly, SessionState::Authenticated) => {
            NavigationOutcome::Redirect(table.landing_route().to_string())
        }
        _ => NavigationOutcome::Allow(target.to_string()),
    }
}

/// Applies [`decide`] using the live session state of a credential store.
#[derive(Debug, Clone)]
pub struct NavigationGuard<'a, S> {
    routes: &'a RouteTable,
    store: &'a CredentialStore<S>,
}

impl<'a, S: Storage> NavigationGuard<'a, S> {
    pub fn new(routes: &'a RouteTable, store: &'a CredentialStore<S>) -> Self {
        Self { routes, store }
    }

    /// Decides a navigation. Never fails: if storage cannot be read the
    /// visitor is treated as anonymous.
    #[instrument(skip(self, request), fields(target = %request.target, from = ?request.from))]
    pub fn navigate(&self, request: &NavigationRequest) -> NavigationOutcome {
        let state = self.store.session_state().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read session state, treating as anonymous");
            SessionState::Anonymous
        });

        let outcome = decide(self.routes, &request.target, state);
        debug!(?state, %outcome, "Navigation decided");
        outcome
    }

    pub fn routes(&self) -> &RouteTable {
        self.routes
    }
}
