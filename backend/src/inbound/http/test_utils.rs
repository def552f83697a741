//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::{LookupGuard, Movie, User};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryRepository;

/// Movie seeded by handler tests.
pub fn avatar() -> Movie {
    Movie {
        title: "Avatar".to_owned(),
        director: "James Cameron".to_owned(),
        year: "2009".to_owned(),
        color: "1".to_owned(),
        duration: 162,
    }
}

/// User seeded by handler tests.
pub fn marie() -> User {
    User {
        firstname: "Marie".to_owned(),
        lastname: "Martin".to_owned(),
        email: "marie.martin@example.com".to_owned(),
        city: "Paris".to_owned(),
        language: "French".to_owned(),
    }
}

/// Build the full API over in-memory stores.
pub fn test_app(
    movies: Vec<Movie>,
    users: Vec<User>,
    user_lookup: LookupGuard,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(
        Arc::new(InMemoryRepository::with_records(movies)),
        Arc::new(InMemoryRepository::with_records(users)),
        user_lookup,
    );
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}

/// Build the API with only movies seeded.
pub fn movie_app(
    movies: Vec<Movie>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app(movies, Vec::new(), LookupGuard::None)
}
