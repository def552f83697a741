//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code and response body.

use super::resource::ResourceKind;
use super::validation::{FieldError, IncompletePayload};

/// Stable machine-readable category of a [`ResourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Create payload failed the declared schema.
    ValidationFailed,
    /// Replace payload cannot form a full row.
    IncompletePayload,
    /// Body is not a JSON object.
    MalformedPayload,
    /// No record matches the identifier.
    NotFound,
    /// Storage refused a write, e.g. a constraint violation.
    StorageRejected,
    /// Storage could not be reached or failed to execute the operation.
    StorageUnavailable,
}

/// Failure outcome of a resource operation.
///
/// # Examples
/// ```
/// use cinema_api::domain::{ErrorCode, ResourceError};
///
/// let err = ResourceError::storage_rejection("Duplicate entry 'a@b.co' for key 'email'");
/// assert_eq!(err.code(), ErrorCode::StorageRejected);
/// assert_eq!(err.to_string(), "Duplicate entry 'a@b.co' for key 'email'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("payload failed validation on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    IncompletePayload(#[from] IncompletePayload),
    #[error("malformed request body: {message}")]
    MalformedPayload { message: String },
    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: String },
    #[error("{message}")]
    StorageRejection { message: String },
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },
}

impl ResourceError {
    /// Request body that is not a JSON object.
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// No `kind` row matches the raw identifier `id`.
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Storage refused a write; `message` is returned to the client as is.
    pub fn storage_rejection(message: impl Into<String>) -> Self {
        Self::StorageRejection {
            message: message.into(),
        }
    }

    /// Storage could not be used; `message` is logged, never returned.
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Stable code the HTTP adapter maps to a status.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::IncompletePayload(_) => ErrorCode::IncompletePayload,
            Self::MalformedPayload { .. } => ErrorCode::MalformedPayload,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::StorageRejection { .. } => ErrorCode::StorageRejected,
            Self::StorageUnavailable { .. } => ErrorCode::StorageUnavailable,
        }
    }
}

#[cfg(test)]
mod tests;
