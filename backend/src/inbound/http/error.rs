//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`ResourceError`] HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent status codes and bodies.
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | validation | 422 | `{"validationErrors": [...]}` |
//! | incomplete or malformed payload, storage rejection | 400 | `{"message": ...}` |
//! | not found | 404 | empty |
//! | storage unavailable | 500 | empty |

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{ErrorCode, FieldError, ResourceError};
use crate::middleware::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ResourceError>;

#[derive(Serialize)]
struct ValidationErrorsBody<'a> {
    #[serde(rename = "validationErrors")]
    validation_errors: &'a [FieldError],
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::IncompletePayload
        | ErrorCode::MalformedPayload
        | ErrorCode::StorageRejected => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ResourceError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }

        match self {
            Self::Validation(errors) => builder.json(ValidationErrorsBody {
                validation_errors: errors,
            }),
            Self::IncompletePayload(_)
            | Self::MalformedPayload { .. }
            | Self::StorageRejection { .. } => builder.json(MessageBody {
                message: self.to_string(),
            }),
            Self::NotFound { .. } => builder.finish(),
            Self::StorageUnavailable { .. } => {
                // Storage details stay in the logs.
                error!(error = %self, "responding with internal server error");
                builder.finish()
            }
        }
    }
}

#[cfg(test)]
mod tests;
