//! Movie resource.

use serde::{Deserialize, Serialize};

use super::payload::Payload;
use super::resource::{Resource, ResourceKind};
use super::validation::{FieldSpec, IncompletePayload, Schema, require_integer, require_text};

static MOVIE_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text("title"),
    FieldSpec::text("director"),
    FieldSpec::text("year"),
    FieldSpec::text("color"),
    FieldSpec::integer("duration"),
];

/// Field schema for movie payloads, in response order.
pub static MOVIE_SCHEMA: Schema = Schema::new(&MOVIE_FIELDS);

/// A movie record without its identifier.
///
/// `year` and `color` are kept as text to match their columns; `color` is a
/// `"1"`/`"0"` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: String,
    pub duration: i32,
}

impl Resource for Movie {
    const KIND: ResourceKind = ResourceKind::Movie;

    fn schema() -> &'static Schema {
        &MOVIE_SCHEMA
    }

    fn from_payload(payload: &Payload) -> Result<Self, IncompletePayload> {
        MOVIE_SCHEMA.ensure_complete(payload)?;
        Ok(Self {
            title: require_text(payload, "title")?,
            director: require_text(payload, "director")?,
            year: require_text(payload, "year")?,
            color: require_text(payload, "color")?,
            duration: require_integer(payload, "duration")?,
        })
    }
}
