//! Routes and their access classification.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAccess {
    /// Reachable in every session state.
    Public,
    /// Reachable only with a session.
    Private,
    /// Reachable only without a session (login, signup).
    AuthOnly,
}

impl fmt::Display for RouteAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RouteAccess::Public => "public",
            RouteAccess::Private => "private",
            RouteAccess::AuthOnly => "auth-only",
        })
    }
}

/// A named in-app view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub access: RouteAccess,
}

impl Route {
    pub fn new(name: impl Into<String>, path: impl Into<String>, access: RouteAccess) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            access,
        }
    }
}

/// Route classification table with the two redirect targets.
///
/// `login` is where anonymous visitors of private routes are sent; `landing`
/// is where signed-in visitors of auth-only routes are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
    login: String,
    landing: String,
}

impl RouteTable {
    /// Builds a table, checking that names and paths are unique and that the
    /// redirect targets exist.
    ///
    /// The login route must not be private and the landing route must not be
    /// auth-only, otherwise a redirect would land on a route that redirects
    /// again.
    pub fn new(
        routes: Vec<Route>,
        login: impl Into<String>,
        landing: impl Into<String>,
    ) -> Result<Self> {
        let login = login.into();
        let landing = landing.into();

        let mut names = HashSet::new();
        let mut paths = HashSet::new();
        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(table_error(format!("duplicate route name '{}'", route.name)));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(table_error(format!("duplicate route path '{}'", route.path)));
            }
        }

        let table = Self {
            routes,
            login,
            landing,
        };

        let login_route = table
            .get(&table.login)
            .ok_or_else(|| table_error(format!("login route '{}' is not defined", table.login)))?;
        if login_route.access == RouteAccess::Private {
            return Err(table_error(format!("login route '{}' is private", table.login)));
        }

        let landing_route = table.get(&table.landing).ok_or_else(|| {
            table_error(format!("landing route '{}' is not defined", table.landing))
        })?;
        if landing_route.access == RouteAccess::AuthOnly {
            return Err(table_error(format!(
                "landing route '{}' is auth-only",
                table.landing
            )));
        }

        Ok(table)
    }

    /// Looks up a route by name.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Looks up a route by name, then by path.
    pub fn resolve(&self, name_or_path: &str) -> Option<&Route> {
        self.get(name_or_path)
            .or_else(|| self.routes.iter().find(|r| r.path == name_or_path))
    }

    /// Access class of a route; unknown names are public.
    pub fn access(&self, name: &str) -> RouteAccess {
        self.get(name).map_or(RouteAccess::Public, |r| r.access)
    }

    pub fn login_route(&self) -> &str {
        &self.login
    }

    pub fn landing_route(&self) -> &str {
        &self.landing
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    /// Home is public, Login and Signup are auth-only, Profile is private.
    fn default() -> Self {
        Self {
            routes: vec![
                Route::new("Home", "/", RouteAccess::Public),
                Route::new("Login", "/login", RouteAccess::AuthOnly),
                Route::new("Signup", "/signup", RouteAccess::AuthOnly),
                Route::new("Profile", "/profile", RouteAccess::Private),
            ],
            login: "Login".to_string(),
            landing: "Profile".to_string(),
        }
    }
}

fn table_error(reason: String) -> crate::Error {
    InvalidInputError::RouteTable { reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        let table = RouteTable::default();
        let rebuilt = RouteTable::new(
            table.routes().to_vec(),
            table.login_route(),
            table.landing_route(),
        )
        .unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn resolve_by_name_or_path() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("Profile").unwrap().path, "/profile");
        assert_eq!(table.resolve("/signup").unwrap().name, "Signup");
        assert!(table.resolve("/nowhere").is_none());
    }

    #[test]
    fn unknown_routes_are_public() {
        assert_eq!(RouteTable::default().access("Settings"), RouteAccess::Public);
    }

    #[test]
    fn rejects_duplicate_names() {
        let routes = vec![
            Route::new("Login", "/login", RouteAccess::AuthOnly),
            Route::new("Login", "/signin", RouteAccess::AuthOnly),
            Route::new("Home", "/", RouteAccess::Public),
        ];
        assert!(RouteTable::new(routes, "Login", "Home").is_err());
    }

    #[test]
    fn rejects_missing_redirect_targets() {
        let routes = vec![Route::new("Home", "/", RouteAccess::Public)];
        assert!(RouteTable::new(routes.clone(), "Login", "Home").is_err());
        assert!(RouteTable::new(routes, "Home", "Profile").is_err());
    }

    #[test]
    fn rejects_redirect_targets_that_redirect_again() {
        let routes = vec![
            Route::new("Login", "/login", RouteAccess::Private),
            Route::new("Home", "/", RouteAccess::Public),
        ];
        assert!(RouteTable::new(routes, "Login", "Home").is_err());

        let routes = vec![
            Route::new("Login", "/login", RouteAccess::AuthOnly),
            Route::new("Signup", "/signup", RouteAccess::AuthOnly),
        ];
        assert!(RouteTable::new(routes, "Login", "Signup").is_err());
    }

    #[test]
    fn access_serializes_kebab_case() {
        let json = serde_json::to_string(&RouteAccess::AuthOnly).unwrap();
        assert_eq!(json, "\"auth-only\"");
        assert_eq!(RouteAccess::AuthOnly.to_string(), "auth-only");
    }
}
