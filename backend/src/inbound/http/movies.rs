//! Movies API handlers.
//!
//! ```text
//! GET    /api/movies
//! GET    /api/movies/{id}
//! POST   /api/movies       {"title":"Star Wars","director":"George Lucas","year":"1977","color":"1","duration":120}
//! PUT    /api/movies/{id}
//! DELETE /api/movies/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Movie, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::{Created, RequestPayload};
use crate::inbound::http::schemas::{
    CreatedSchema, MessageSchema, MovieSchema, ValidationErrorsSchema,
};
use crate::inbound::http::state::HttpState;

/// List every movie.
#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "Movies", body = [MovieSchema]),
        (status = 500, description = "Storage failure")
    ),
    tags = ["movies"],
    operation_id = "listMovies"
)]
#[get("/movies")]
pub async fn list_movies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Stored<Movie>>>> {
    state.movies.list().await.map(web::Json)
}

/// Fetch one movie.
///
/// An identifier that is not an integer matches no movie.
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(("id" = String, Path, description = "Movie identifier")),
    responses(
        (status = 200, description = "Movie", body = MovieSchema),
        (status = 400, description = "Malformed JSON body", body = MessageSchema),
        (status = 404, description = "No movie with this identifier"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["movies"],
    operation_id = "getMovie"
)]
#[get("/movies/{id}")]
pub async fn get_movie(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: RequestPayload,
) -> ApiResult<web::Json<Stored<Movie>>> {
    state.movies.get(&id, &payload.0).await.map(web::Json)
}

/// Create a movie after validating every field.
#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = MovieSchema,
    responses(
        (status = 201, description = "Movie created", body = CreatedSchema),
        (status = 400, description = "Malformed body or storage rejection", body = MessageSchema),
        (status = 422, description = "Validation failed", body = ValidationErrorsSchema),
        (status = 500, description = "Storage unavailable")
    ),
    tags = ["movies"],
    operation_id = "createMovie"
)]
#[post("/movies")]
pub async fn create_movie(
    state: web::Data<HttpState>,
    payload: RequestPayload,
) -> ApiResult<HttpResponse> {
    let id = state.movies.create(&payload.0).await?;
    Ok(HttpResponse::Created().json(Created { id }))
}

/// Replace every field of an existing movie.
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(("id" = String, Path, description = "Movie identifier")),
    request_body = MovieSchema,
    responses(
        (status = 204, description = "Movie replaced"),
        (status = 400, description = "Incomplete payload or storage rejection", body = MessageSchema),
        (status = 404, description = "No movie with this identifier"),
        (status = 500, description = "Storage unavailable")
    ),
    tags = ["movies"],
    operation_id = "replaceMovie"
)]
#[put("/movies/{id}")]
pub async fn replace_movie(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: RequestPayload,
) -> ApiResult<HttpResponse> {
    state.movies.replace(&id, &payload.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a movie.
///
/// An identifier that is not an integer is a storage failure, not a miss.
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(("id" = String, Path, description = "Movie identifier")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "No movie with this identifier"),
        (status = 500, description = "Unusable identifier or storage failure")
    ),
    tags = ["movies"],
    operation_id = "deleteMovie"
)]
#[delete("/movies/{id}")]
pub async fn delete_movie(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.movies.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
