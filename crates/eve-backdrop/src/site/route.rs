use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// Client-side pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Documentation,
    Protocol,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Documentation, Route::Protocol];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Documentation => "/documentation",
            Route::Protocol => "/protocol",
        }
    }

    /// Match a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Stable numeric code handed across the WASM boundary.
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// The routes a site variant serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut list: Vec<Route> = Vec::new();
        for r in routes {
            if !list.contains(&r) {
                list.push(r);
            }
        }
        Self { routes: list }
    }

    pub fn contains(&self, route: Route) -> bool {
        self.routes.contains(&route)
    }

    /// Resolve a path to an enabled route.
    pub fn resolve(&self, path: &str) -> Result<Route> {
        Route::from_path(path)
            .filter(|r| self.contains(*r))
            .ok_or_else(|| BackdropError::UnknownRoute(path.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Route> + '_ {
        self.routes.iter().copied()
    }
}

impl Default for RouteSet {
    fn default() -> Self {
        Self::new(Route::ALL)
    }
}
