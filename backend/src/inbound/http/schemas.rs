//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for a stored [`crate::domain::Movie`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Movie)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MovieSchema {
    /// Storage-assigned identifier. Absent from request bodies.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Star Wars")]
    title: String,
    #[schema(example = "George Lucas")]
    director: String,
    #[schema(example = "1977")]
    year: String,
    /// Colour flag stored as text, `"1"` for colour and `"0"` otherwise.
    #[schema(example = "1")]
    color: String,
    /// Running time in minutes.
    #[schema(example = 120)]
    duration: i32,
}

/// OpenAPI schema for a stored [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Storage-assigned identifier. Absent from request bodies.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Marie")]
    firstname: String,
    #[schema(example = "Martin")]
    lastname: String,
    /// Unique across users.
    #[schema(example = "marie.martin@example.com")]
    email: String,
    #[schema(example = "Paris")]
    city: String,
    #[schema(example = "French")]
    language: String,
}

/// OpenAPI schema for [`crate::domain::FieldError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorSchema {
    #[schema(example = "title")]
    field: String,
    #[schema(example = "title is required")]
    message: String,
}

/// Body of a 422 response.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorsSchema {
    #[schema(rename = "validationErrors")]
    validation_errors: Vec<FieldErrorSchema>,
}

/// Body of a 400 response.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MessageSchema {
    #[schema(example = "duplicate key value violates unique constraint \"users_email_key\"")]
    message: String,
}

/// Body of a 201 response.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreatedSchema {
    #[schema(example = 42)]
    id: i32,
}
