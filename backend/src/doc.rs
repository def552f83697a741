//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every movies and users endpoint from the inbound layer
//! - **Schemas**: wrappers from [`crate::inbound::http::schemas`] that provide
//!   OpenAPI definitions without coupling domain types to utoipa
//!
//! The generated document is served alongside Swagger UI in debug builds.

use crate::inbound::http::schemas::{
    CreatedSchema, FieldErrorSchema, MessageSchema, MovieSchema, UserSchema,
    ValidationErrorsSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinema API",
        description = "CRUD interface over the movies and users catalogues."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::movies::list_movies,
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::movies::create_movie,
        crate::inbound::http::movies::replace_movie,
        crate::inbound::http::movies::delete_movie,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::replace_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        MovieSchema,
        UserSchema,
        FieldErrorSchema,
        ValidationErrorsSchema,
        MessageSchema,
        CreatedSchema
    )),
    tags(
        (name = "movies", description = "Movie catalogue"),
        (name = "users", description = "Registered users")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the OpenAPI document surface.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::path::HttpMethod;

    #[rstest]
    #[case("/api/movies", HttpMethod::Get)]
    #[case("/api/movies", HttpMethod::Post)]
    #[case("/api/movies/{id}", HttpMethod::Get)]
    #[case("/api/movies/{id}", HttpMethod::Put)]
    #[case("/api/movies/{id}", HttpMethod::Delete)]
    #[case("/api/users", HttpMethod::Get)]
    #[case("/api/users", HttpMethod::Post)]
    #[case("/api/users/{id}", HttpMethod::Get)]
    #[case("/api/users/{id}", HttpMethod::Put)]
    #[case("/api/users/{id}", HttpMethod::Delete)]
    fn every_endpoint_is_documented(#[case] path: &str, #[case] method: HttpMethod) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path documented");
        let (operation, verb) = match method {
            HttpMethod::Get => (item.get.as_ref(), "GET"),
            HttpMethod::Post => (item.post.as_ref(), "POST"),
            HttpMethod::Put => (item.put.as_ref(), "PUT"),
            HttpMethod::Delete => (item.delete.as_ref(), "DELETE"),
            _ => (None, "other"),
        };
        assert!(operation.is_some(), "{path} should document {verb}");
    }

    #[test]
    fn resource_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        // utoipa replaces :: with . in schema names
        assert!(schemas.contains_key("crate.domain.Movie"));
        assert!(schemas.contains_key("crate.domain.User"));
    }
}
