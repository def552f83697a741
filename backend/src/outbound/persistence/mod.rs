//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of [`crate::domain::ports::ResourceRepository`]
//! backed by PostgreSQL through `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain records. Gates and status decisions live in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: pool and Diesel failures become `RepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use cinema_api::outbound::persistence::{DbPool, DieselMovieRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), cinema_api::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cinema")).await?;
//! let movies = DieselMovieRepository::new(pool);
//! # let _ = movies;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_movie_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_movie_repository::DieselMovieRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
