//! Schema-driven payload validation shared by every resource.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s. Two checks run against
//! it:
//!
//! - [`Schema::validate`] is the create-time validator. It reports one
//!   [`FieldError`] per failing field, in declaration order.
//! - [`Schema::ensure_complete`] is the looser replace-time gate. It only asks
//!   whether a full row can be built and ignores declared formats.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::payload::Payload;

/// Storage type a field must convert to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// Additional shape constraint checked by the create-time validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Simple `local@domain.tld` shape.
    Email,
}

impl FieldFormat {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Email => email_regex().is_match(value),
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Declaration of one required payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub format: Option<FieldFormat>,
}

impl FieldSpec {
    /// Required text field without a format constraint.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            format: None,
        }
    }

    /// Required integer field.
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            format: None,
        }
    }

    /// Add a shape constraint checked only at create time.
    pub const fn with_format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    fn has_valid_kind(&self, payload: &Payload) -> bool {
        match self.kind {
            FieldKind::Text => payload.text(self.name).is_some(),
            FieldKind::Integer => payload.integer(self.name).is_some(),
        }
    }
}

/// A single failing field, serialised as `{"field": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn required(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: format!("{field} is required"),
        }
    }

    fn invalid(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: format!("Invalid {field}"),
        }
    }
}

/// Raised by the replace-time gate when a full row cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or invalid fields: {}", .fields.join(", "))]
pub struct IncompletePayload {
    pub fields: Vec<&'static str>,
}

impl IncompletePayload {
    /// A single missing or mistyped field.
    pub fn field(field: &'static str) -> Self {
        Self {
            fields: vec![field],
        }
    }
}

/// Ordered field schema for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Run the create-time validator.
    ///
    /// # Examples
    /// ```
    /// use cinema_api::domain::{FieldSpec, Payload, Schema};
    ///
    /// static FIELDS: [FieldSpec; 2] = [FieldSpec::text("title"), FieldSpec::integer("duration")];
    /// let schema = Schema::new(&FIELDS);
    ///
    /// let payload = Payload::from_slice(br#"{"duration":"soon"}"#).expect("object");
    /// let errors = schema.validate(&payload);
    /// assert_eq!(errors[0].message, "title is required");
    /// assert_eq!(errors[1].message, "Invalid duration");
    /// ```
    pub fn validate(&self, payload: &Payload) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|spec| validate_field(spec, payload))
            .collect()
    }

    /// Check that every required field can be converted into the row.
    ///
    /// # Errors
    ///
    /// Returns [`IncompletePayload`] listing each field that is blank or of
    /// the wrong kind, in declaration order.
    pub fn ensure_complete(&self, payload: &Payload) -> Result<(), IncompletePayload> {
        let fields: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|spec| payload.is_blank(spec.name) || !spec.has_valid_kind(payload))
            .map(|spec| spec.name)
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(IncompletePayload { fields })
        }
    }
}

fn validate_field(spec: &FieldSpec, payload: &Payload) -> Option<FieldError> {
    if payload.is_blank(spec.name) {
        return Some(FieldError::required(spec.name));
    }
    if !spec.has_valid_kind(payload) {
        return Some(FieldError::invalid(spec.name));
    }
    let format = spec.format?;
    let value = payload.text(spec.name)?;
    (!format.accepts(&value)).then(|| FieldError::invalid(spec.name))
}

/// Read a text field after the schema gate has passed.
pub(crate) fn require_text(payload: &Payload, field: &'static str) -> Result<String, IncompletePayload> {
    payload
        .text(field)
        .ok_or_else(|| IncompletePayload::field(field))
}

/// Read an integer field after the schema gate has passed.
pub(crate) fn require_integer(payload: &Payload, field: &'static str) -> Result<i32, IncompletePayload> {
    payload
        .integer(field)
        .ok_or_else(|| IncompletePayload::field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    static FIELDS: [FieldSpec; 3] = [
        FieldSpec::text("name"),
        FieldSpec::text("email").with_format(FieldFormat::Email),
        FieldSpec::integer("age"),
    ];

    #[fixture]
    fn schema() -> Schema {
        Schema::new(&FIELDS)
    }

    fn payload(value: Value) -> Payload {
        Payload::try_from(value).expect("object payload")
    }

    fn messages(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|error| error.message.as_str()).collect()
    }

    #[rstest]
    fn valid_payload_has_no_errors(schema: Schema) {
        let body = payload(json!({ "name": "Ada", "email": "ada@example.org", "age": 36 }));
        assert!(schema.validate(&body).is_empty());
    }

    #[rstest]
    fn empty_payload_reports_every_required_field_in_order(schema: Schema) {
        let errors = schema.validate(&Payload::empty());
        assert_eq!(
            messages(&errors),
            vec!["name is required", "email is required", "age is required"]
        );
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("ada@")]
    #[case("@example.org")]
    #[case("ada@example")]
    #[case("ada example@example.org")]
    fn malformed_email_is_invalid(schema: Schema, #[case] email: &str) {
        let body = payload(json!({ "name": "Ada", "email": email, "age": 36 }));
        let errors = schema.validate(&body);
        assert_eq!(
            errors,
            vec![FieldError {
                field: "email".to_owned(),
                message: "Invalid email".to_owned(),
            }]
        );
    }

    #[rstest]
    #[case("ada@example.org")]
    #[case("Ada.Lovelace@Example.CO")]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6@wild.co")]
    #[case("first_last@sub.domain.io")]
    fn well_formed_email_passes(#[case] email: &str) {
        assert!(FieldFormat::Email.accepts(email));
    }

    #[rstest]
    fn wrong_kind_is_invalid_not_missing(schema: Schema) {
        let body = payload(json!({ "name": ["Ada"], "email": "ada@example.org", "age": "old" }));
        assert_eq!(messages(&schema.validate(&body)), vec!["Invalid name", "Invalid age"]);
    }

    #[rstest]
    fn undeclared_fields_are_ignored(schema: Schema) {
        let body = payload(json!({
            "name": "Ada",
            "email": "ada@example.org",
            "age": 36,
            "nickname": { "nested": true },
        }));
        assert!(schema.validate(&body).is_empty());
    }

    #[rstest]
    fn completeness_ignores_formats(schema: Schema) {
        let body = payload(json!({ "name": "Ada", "email": "nope", "age": 36 }));
        assert_eq!(schema.ensure_complete(&body), Ok(()));
    }

    #[rstest]
    fn completeness_lists_missing_and_mistyped_fields(schema: Schema) {
        let body = payload(json!({ "name": "", "age": "many" }));
        let err = schema.ensure_complete(&body).expect_err("incomplete payload");
        assert_eq!(err.fields, vec!["name", "email", "age"]);
        assert_eq!(err.to_string(), "missing or invalid fields: name, email, age");
    }
}
