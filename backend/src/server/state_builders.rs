//! Builders for HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;

use cinema_api::domain::ports::ResourceRepository;
use cinema_api::domain::{Movie, User};
use cinema_api::inbound::http::state::HttpState;
use cinema_api::outbound::memory::InMemoryRepository;
use cinema_api::outbound::persistence::{DieselMovieRepository, DieselUserRepository};
use tracing::warn;

use super::ServerConfig;

type Repositories = (
    Arc<dyn ResourceRepository<Movie>>,
    Arc<dyn ResourceRepository<User>>,
);

fn build_repositories(config: &ServerConfig) -> Repositories {
    match &config.db_pool {
        Some(pool) => (
            Arc::new(DieselMovieRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; records are kept in memory and lost on exit");
            (
                Arc::new(InMemoryRepository::<Movie>::new()),
                Arc::new(InMemoryRepository::<User>::new()),
            )
        }
    }
}

/// Build shared handler state once; workers clone the `Data` handle.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (movies, users) = build_repositories(config);
    web::Data::new(HttpState::new(movies, users, config.user_lookup))
}
