//! User resource.

use serde::{Deserialize, Serialize};

use super::payload::Payload;
use super::resource::{Resource, ResourceKind};
use super::validation::{FieldFormat, FieldSpec, IncompletePayload, Schema, require_text};

static USER_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text("firstname"),
    FieldSpec::text("lastname"),
    FieldSpec::text("email").with_format(FieldFormat::Email),
    FieldSpec::text("city"),
    FieldSpec::text("language"),
];

/// Field schema for user payloads. `email` carries the email shape check.
pub static USER_SCHEMA: Schema = Schema::new(&USER_FIELDS);

/// A user record without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;

    fn schema() -> &'static Schema {
        &USER_SCHEMA
    }

    fn from_payload(payload: &Payload) -> Result<Self, IncompletePayload> {
        USER_SCHEMA.ensure_complete(payload)?;
        Ok(Self {
            firstname: require_text(payload, "firstname")?,
            lastname: require_text(payload, "lastname")?,
            email: require_text(payload, "email")?,
            city: require_text(payload, "city")?,
            language: require_text(payload, "language")?,
        })
    }

    fn unique_key(&self) -> Option<(&'static str, &str)> {
        Some(("email", self.email.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn payload(value: Value) -> Payload {
        Payload::try_from(value).expect("object payload")
    }

    #[rstest]
    fn lastname_only_reports_the_other_fields() {
        let body = payload(json!({ "lastname": "Abajoli" }));
        let errors = USER_SCHEMA.validate(&body);
        let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(fields, vec!["firstname", "email", "city", "language"]);
        assert_eq!(errors[0].message, "firstname is required");
    }

    #[rstest]
    fn malformed_email_fails_validation_but_not_completeness() {
        let body = payload(json!({
            "firstname": "Marie",
            "lastname": "Martin",
            "email": "marie.martin",
            "city": "Paris",
            "language": "French",
        }));
        let errors = USER_SCHEMA.validate(&body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid email");

        let user = User::from_payload(&body).expect("complete payload");
        assert_eq!(user.email, "marie.martin");
    }

    #[rstest]
    fn email_is_the_unique_key() {
        let user = User {
            firstname: "Raph".to_owned(),
            lastname: "Bard".to_owned(),
            email: "raph@wild.co".to_owned(),
            city: "Bordeaux".to_owned(),
            language: "Francais".to_owned(),
        };
        assert_eq!(user.unique_key(), Some(("email", "raph@wild.co")));
    }
}
