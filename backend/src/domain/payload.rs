//! Untyped request payloads.
//!
//! Bodies arrive as arbitrary JSON. Field types are not trusted until the
//! validator (create) or the completeness gate (replace) has accepted the
//! payload; until then values are read through the lenient accessors below.

use serde_json::{Map, Value};

use super::error::ResourceError;

/// A JSON object received at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Payload with no fields, used for requests without a body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a raw request body.
    ///
    /// An empty (or whitespace-only) body yields an empty payload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedPayload`] when the body is not JSON
    /// or is JSON but not an object.
    ///
    /// # Examples
    /// ```
    /// use cinema_api::domain::Payload;
    ///
    /// let payload = Payload::from_slice(br#"{"title":"Alien"}"#).expect("object");
    /// assert_eq!(payload.text("title").as_deref(), Some("Alien"));
    /// assert!(Payload::from_slice(b"").expect("empty").is_empty());
    /// assert!(Payload::from_slice(b"[1]").is_err());
    /// ```
    pub fn from_slice(body: &[u8]) -> Result<Self, ResourceError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::empty());
        }
        let value: Value = serde_json::from_slice(body)
            .map_err(|err| ResourceError::malformed_payload(err.to_string()))?;
        Self::try_from(value)
    }

    /// Whether the body carried no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the field is absent, `null`, or a string that is empty once
    /// trimmed.
    pub fn is_blank(&self, field: &str) -> bool {
        match self.0.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(text)) => text.trim().is_empty(),
            Some(_) => false,
        }
    }

    /// Read a field as text. Numbers and booleans are rendered the way a
    /// text column would store them; arrays and objects are rejected.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(if *flag { "1" } else { "0" }.to_owned()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Read a field as a 32-bit integer, accepting integer strings.
    pub fn integer(&self, field: &str) -> Option<i32> {
        match self.0.get(field)? {
            Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

impl TryFrom<Value> for Payload {
    type Error = ResourceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ResourceError::malformed_payload(format!(
                "request body must be a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
