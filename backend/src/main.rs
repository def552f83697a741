//! Backend entry-point: loads settings, picks the storage backend and serves
//! the movies and users API.

mod server;

use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cinema_api::outbound::persistence::DbPool;
use cinema_api::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr).with_user_lookup(settings.user_lookup_guard());
    if let Some(pool_config) = settings.pool_config() {
        let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "starting server");
    create_server(config)?.await
}
