//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod resource_repository;

pub use resource_repository::{RepositoryError, ResourceRepository};
