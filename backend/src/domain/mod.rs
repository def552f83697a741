//! Domain primitives and operation handlers.
//!
//! Purpose: Define the movie and user resources, the schema-driven payload
//! gates, and the generic operation handlers used by the HTTP adapter. Types
//! here know nothing about HTTP or SQL.
//!
//! Public surface:
//! - Resource, ResourceId, Stored: the abstraction shared by every resource.
//! - Movie, User: the two concrete resources and their schemas.
//! - Payload, Schema, FieldError: untyped bodies and their validation.
//! - ResourceService: list/get/create/replace/delete over a repository port.
//! - ResourceError, ErrorCode: transport agnostic failure outcomes.

pub mod error;
pub mod movie;
pub mod payload;
pub mod ports;
pub mod resource;
pub mod resource_service;
pub mod user;
pub mod validation;

pub use self::error::{ErrorCode, ResourceError};
pub use self::movie::{MOVIE_SCHEMA, Movie};
pub use self::payload::Payload;
pub use self::resource::{Resource, ResourceId, ResourceIdError, ResourceKind, Stored};
pub use self::resource_service::{LookupGuard, ResourceService};
pub use self::user::{USER_SCHEMA, User};
pub use self::validation::{
    FieldError, FieldFormat, FieldKind, FieldSpec, IncompletePayload, Schema,
};
