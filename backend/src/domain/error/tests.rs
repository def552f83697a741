//! Tests for domain error categorisation and messages.

use super::*;
use rstest::rstest;

#[rstest]
#[case(ResourceError::Validation(Vec::new()), ErrorCode::ValidationFailed)]
#[case(
    ResourceError::IncompletePayload(IncompletePayload::field("title")),
    ErrorCode::IncompletePayload
)]
#[case(ResourceError::malformed_payload("eof"), ErrorCode::MalformedPayload)]
#[case(ResourceError::not_found(ResourceKind::Movie, "0"), ErrorCode::NotFound)]
#[case(ResourceError::storage_rejection("dup"), ErrorCode::StorageRejected)]
#[case(ResourceError::storage_unavailable("down"), ErrorCode::StorageUnavailable)]
fn code_matches_variant(#[case] error: ResourceError, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn not_found_names_the_resource() {
    let err = ResourceError::not_found(ResourceKind::User, "12");
    assert_eq!(err.to_string(), "user 12 not found");
}

#[rstest]
fn incomplete_payload_converts_with_question_mark() {
    fn gate() -> Result<(), ResourceError> {
        let gate: Result<(), IncompletePayload> = Err(IncompletePayload::field("email"));
        gate?;
        Ok(())
    }

    let err = gate().expect_err("incomplete payload");
    assert_eq!(err.to_string(), "missing or invalid fields: email");
}

#[rstest]
fn storage_rejection_keeps_message_verbatim() {
    let message = "duplicate key value violates unique constraint \"users_email_key\"";
    assert_eq!(ResourceError::storage_rejection(message).to_string(), message);
}
