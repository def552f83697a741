//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ResourceRepository;
use crate::domain::{LookupGuard, Movie, ResourceService, User};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub movies: Arc<ResourceService<Movie>>,
    pub users: Arc<ResourceService<User>>,
}

impl HttpState {
    /// Construct state from one repository per resource.
    ///
    /// `user_lookup` is applied in front of `GET /api/users/{id}`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cinema_api::domain::{LookupGuard, Movie, User};
    /// use cinema_api::inbound::http::state::HttpState;
    /// use cinema_api::outbound::memory::InMemoryRepository;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryRepository::<Movie>::new()),
    ///     Arc::new(InMemoryRepository::<User>::new()),
    ///     LookupGuard::ValidateBody,
    /// );
    /// assert_eq!(state.users.lookup_guard(), LookupGuard::ValidateBody);
    /// ```
    pub fn new(
        movies: Arc<dyn ResourceRepository<Movie>>,
        users: Arc<dyn ResourceRepository<User>>,
        user_lookup: LookupGuard,
    ) -> Self {
        Self {
            movies: Arc::new(ResourceService::new(movies)),
            users: Arc::new(ResourceService::new(users).with_lookup_guard(user_lookup)),
        }
    }
}
