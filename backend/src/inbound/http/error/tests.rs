//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{IncompletePayload, ResourceKind};
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

async fn body_of(error: &ResourceError) -> (StatusCode, Vec<u8>) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    (status, bytes.to_vec())
}

#[rstest]
#[case(ResourceError::Validation(Vec::new()), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(IncompletePayload::field("title").into(), StatusCode::BAD_REQUEST)]
#[case(ResourceError::malformed_payload("eof"), StatusCode::BAD_REQUEST)]
#[case(ResourceError::not_found(ResourceKind::Movie, "0"), StatusCode::NOT_FOUND)]
#[case(ResourceError::storage_rejection("too long"), StatusCode::BAD_REQUEST)]
#[case(ResourceError::storage_unavailable("refused"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: ResourceError, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[actix_web::test]
async fn validation_errors_are_listed_in_order() {
    let error = ResourceError::Validation(vec![
        FieldError {
            field: "firstname".to_owned(),
            message: "firstname is required".to_owned(),
        },
        FieldError {
            field: "email".to_owned(),
            message: "Invalid email".to_owned(),
        },
    ]);
    let (status, body) = body_of(&error).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        value,
        json!({
            "validationErrors": [
                { "field": "firstname", "message": "firstname is required" },
                { "field": "email", "message": "Invalid email" },
            ]
        })
    );
}

#[actix_web::test]
async fn storage_rejection_message_is_verbatim() {
    let message = "duplicate key value violates unique constraint \"users_email_key\"";
    let (status, body) = body_of(&ResourceError::storage_rejection(message)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value, json!({ "message": message }));
}

#[rstest]
#[case(ResourceError::not_found(ResourceKind::User, "7"))]
#[case(ResourceError::storage_unavailable("password authentication failed"))]
#[actix_web::test]
async fn not_found_and_internal_errors_have_empty_bodies(#[case] error: ResourceError) {
    let (_, body) = body_of(&error).await;
    assert!(body.is_empty(), "body should be empty");
}

#[actix_web::test]
async fn trace_id_header_is_attached_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid UUID");
    let response = TraceId::scope(trace_id, async {
        ResponseError::error_response(&ResourceError::storage_unavailable("down"))
    })
    .await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header");
    assert_eq!(header, trace_id.to_string());
}
