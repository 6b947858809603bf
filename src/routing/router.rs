//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the route table
//! - Resolve a request path to exactly one handler
//! - Hand back the captured path variable, if any
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Routes ordered by specificity at construction, not registration order
//! - Total: a path that matches nothing resolves to the fallback handler

use crate::routing::handler::{Greeting, Handler};
use crate::routing::matcher::RoutePattern;

/// A single registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub handler: Handler,
}

impl Route {
    /// Create a route from router syntax, e.g. `Route::new("/{name}", Handler::Named)`.
    pub fn new(pattern: &str, handler: Handler) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            handler,
        }
    }
}

/// Result of resolving one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'p> {
    pub handler: Handler,
    /// Captured segment or remaining path, byte-for-byte.
    pub captured: Option<&'p str>,
}

impl RouteMatch<'_> {
    /// Run the selected handler.
    pub fn respond(&self) -> Greeting {
        self.handler.respond(self.captured)
    }
}

/// Immutable table of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table. Routes are stably sorted by pattern specificity.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut routes: Vec<Route> = routes.into_iter().collect();
        routes.sort_by_key(|r| r.pattern.specificity());
        Self { routes }
    }

    /// The greeting service's routes: `/`, `/{name}`, `/{*path}`.
    pub fn standard() -> Self {
        Self::new([
            Route::new("/", Handler::Root),
            Route::new("/{name}", Handler::Named),
            Route::new("/{*path}", Handler::Fallback),
        ])
    }

    /// Routes in the order they are evaluated.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve `path` to a handler.
    pub fn resolve<'p>(&'p self, path: &'p str) -> RouteMatch<'p> {
        self.routes
            .iter()
            .find_map(|route| {
                route.pattern.capture(path).map(|capture| RouteMatch {
                    handler: route.handler,
                    captured: capture.value(),
                })
            })
            .unwrap_or(RouteMatch {
                handler: Handler::Fallback,
                captured: Some(path),
            })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
