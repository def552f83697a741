//! bb8 pool of `diesel-async` PostgreSQL connections shared by the Diesel
//! repositories.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Connections opened at most when no size is configured.
pub const DEFAULT_MAX_SIZE: u32 = 10;
/// Checkout wait when no timeout is configured.
pub const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool construction or checkout failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("connection checkout failed: {message}")]
    Checkout { message: String },
    #[error("connection pool could not be built: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Checkout timed out or the server refused the connection.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// The pool could not be created from its configuration.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Underlying error text without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Sizing and timing for [`DbPool`].
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use cinema_api::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig {
///     max_size: 4,
///     checkout_timeout: Duration::from_secs(5),
///     ..PoolConfig::new("postgres://cinema@localhost/cinema")
/// };
/// assert_eq!(config.min_idle, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_size: u32,
    /// Connections kept open while idle; `None` opens them on demand.
    pub min_idle: Option<u32>,
    pub checkout_timeout: Duration,
}

impl PoolConfig {
    /// Defaults for `database_url`: [`DEFAULT_MAX_SIZE`] connections opened
    /// lazily, waiting [`DEFAULT_CHECKOUT_TIMEOUT`] on checkout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: None,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }
}

/// Shared handle to the connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool. With a `min_idle` floor this also opens connections.
    ///
    /// # Errors
    ///
    /// [`PoolError::Build`] for an unusable URL or an unreachable server.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let PoolConfig {
            database_url,
            max_size,
            min_idle,
            checkout_timeout,
        } = config;
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        Pool::builder()
            .max_size(max_size)
            .min_idle(min_idle)
            .connection_timeout(checkout_timeout)
            .build(manager)
            .await
            .map(|inner| Self { inner })
            .map_err(|err| PoolError::build(err.to_string()))
    }

    /// Borrow a connection for one repository call.
    ///
    /// # Errors
    ///
    /// [`PoolError::Checkout`] when none frees up within the checkout timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_config_opens_connections_lazily() {
        let config = PoolConfig::new("postgres://localhost/cinema");
        assert_eq!(
            config,
            PoolConfig {
                database_url: "postgres://localhost/cinema".to_owned(),
                max_size: DEFAULT_MAX_SIZE,
                min_idle: None,
                checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
            }
        );
    }

    #[rstest]
    #[case(PoolError::checkout("connection refused"), "connection refused")]
    #[case(PoolError::build("invalid URL"), "invalid URL")]
    fn pool_error_keeps_message(#[case] error: PoolError, #[case] message: &str) {
        assert_eq!(error.message(), message);
        assert!(error.to_string().ends_with(message));
    }
}
