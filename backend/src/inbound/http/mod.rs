//! HTTP inbound adapter exposing the movies and users REST endpoints.

pub mod body;
pub mod error;
pub mod movies;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Every resource route, mounted under `/api`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cinema_api::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(movies::list_movies)
        .service(movies::get_movie)
        .service(movies::create_movie)
        .service(movies::replace_movie)
        .service(movies::delete_movie)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::replace_user)
        .service(users::delete_user)
}
