//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use course_catalogue::inbound::http::courses::CourseRouteOptions;
use course_catalogue::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) routes: CourseRouteOptions,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration listening on `bind_addr` with optional routes disabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            routes: CourseRouteOptions::default(),
            db_pool: None,
        }
    }

    /// Attach the course store pool.
    ///
    /// Without a pool the handlers are backed by fixture ports.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Choose which optional course routes are registered.
    #[must_use]
    pub const fn with_routes(mut self, routes: CourseRouteOptions) -> Self {
        self.routes = routes;
        self
    }
}
