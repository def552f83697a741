//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! GET    /api/users/{id}
//! POST   /api/users        {"firstname":"Marie","lastname":"Martin","email":"marie@example.com","city":"Paris","language":"French"}
//! PUT    /api/users/{id}
//! DELETE /api/users/{id}
//! ```
//!
//! While the legacy lookup guard is enabled, `GET /api/users/{id}` runs the
//! create validator against the request body first, so a bodiless lookup
//! answers 422.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Stored, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::{Created, RequestPayload};
use crate::inbound::http::schemas::{
    CreatedSchema, MessageSchema, UserSchema, ValidationErrorsSchema,
};
use crate::inbound::http::state::HttpState;

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cinema_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Stored<User>>>> {
    state.users.list().await.map(web::Json)
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed JSON body", body = MessageSchema),
        (status = 404, description = "No user with this identifier"),
        (status = 422, description = "Request body failed the legacy lookup guard", body = ValidationErrorsSchema),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: RequestPayload,
) -> ApiResult<web::Json<Stored<User>>> {
    state.users.get(&id, &payload.0).await.map(web::Json)
}

/// Create a user after validating every field.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserSchema,
    responses(
        (status = 201, description = "User created", body = CreatedSchema),
        (status = 400, description = "Malformed body or storage rejection, e.g. duplicate email", body = MessageSchema),
        (status = 422, description = "Validation failed", body = ValidationErrorsSchema),
        (status = 500, description = "Storage unavailable")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: RequestPayload,
) -> ApiResult<HttpResponse> {
    let id = state.users.create(&payload.0).await?;
    Ok(HttpResponse::Created().json(Created { id }))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserSchema,
    responses(
        (status = 204, description = "User replaced"),
        (status = 400, description = "Incomplete payload or storage rejection", body = MessageSchema),
        (status = 404, description = "No user with this identifier"),
        (status = 500, description = "Storage unavailable")
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
#[put("/users/{id}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: RequestPayload,
) -> ApiResult<HttpResponse> {
    state.users.replace(&id, &payload.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this identifier"),
        (status = 500, description = "Unusable identifier or storage failure")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.users.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::domain::LookupGuard;
    use crate::inbound::http::test_utils::{marie, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(LookupGuard::ValidateBody, StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(LookupGuard::None, StatusCode::OK)]
    #[actix_web::test]
    async fn bodiless_lookup_depends_on_guard(
        #[case] guard: LookupGuard,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(test_app(Vec::new(), vec![marie()], guard)).await;
        let request = actix_test::TestRequest::get().uri("/api/users/1").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
    }

    #[actix_web::test]
    async fn guarded_lookup_with_complete_body_finds_user() {
        let app = actix_test::init_service(test_app(
            Vec::new(),
            vec![marie()],
            LookupGuard::ValidateBody,
        ))
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/users/1")
            .set_json(json!({
                "firstname": "Any",
                "lastname": "Body",
                "email": "any.body@example.com",
                "city": "Lyon",
                "language": "French",
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["email"], json!("marie.martin@example.com"));
    }

    #[actix_web::test]
    async fn duplicate_email_is_bad_request_with_storage_message() {
        let app = actix_test::init_service(test_app(
            Vec::new(),
            vec![marie()],
            LookupGuard::ValidateBody,
        ))
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "firstname": "Other",
                "lastname": "Marie",
                "email": "marie.martin@example.com",
                "city": "Nantes",
                "language": "French",
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({
                "message": "duplicate key value violates unique constraint \"users_email_key\""
            })
        );
    }
}
