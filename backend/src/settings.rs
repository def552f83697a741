//! Application settings loaded via OrthoConfig.
//!
//! Values are merged from CLI arguments, `CINEMA_*` environment variables and
//! configuration files. Every field has a fallback so the service starts with
//! no configuration at all, using the in-memory store.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::LookupGuard;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LEGACY_USER_LOOKUP: bool = true;

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CINEMA")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without it records live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Connections kept open while the service is idle.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a free pooled connection.
    pub pool_checkout_timeout_secs: Option<u64>,
    /// Validate the request body before `GET /api/users/{id}`. Defaults to on.
    pub legacy_user_lookup: Option<bool>,
}

impl AppSettings {
    /// Interface to bind, `0.0.0.0` unless configured.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, 8080 unless configured.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve `host:port` to the first matching socket address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other(format!("no address for host {}", self.host())))
    }

    /// Pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let defaults = PoolConfig::new(url);
        Some(PoolConfig {
            max_size: self.pool_max_size.unwrap_or(defaults.max_size),
            min_idle: self.pool_min_idle,
            checkout_timeout: self
                .pool_checkout_timeout_secs
                .map_or(defaults.checkout_timeout, Duration::from_secs),
            ..defaults
        })
    }

    /// Gate applied in front of user lookups.
    pub fn user_lookup_guard(&self) -> LookupGuard {
        if self.legacy_user_lookup.unwrap_or(DEFAULT_LEGACY_USER_LOOKUP) {
            LookupGuard::ValidateBody
        } else {
            LookupGuard::None
        }
    }
}
