//! HTTP server configuration object.

use std::net::SocketAddr;

use cinema_api::domain::LookupGuard;
use cinema_api::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) user_lookup: LookupGuard,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with in-memory storage and no user
    /// lookup guard.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            user_lookup: LookupGuard::None,
        }
    }

    /// Attach a database connection pool; the Diesel repositories replace
    /// the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_user_lookup(mut self, guard: LookupGuard) -> Self {
        self.user_lookup = guard;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
