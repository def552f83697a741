//! Resource abstraction shared by movies and users.
//!
//! Operation handlers are generic over [`Resource`]; each resource supplies
//! its field schema, its typed record and the conversion from an untyped
//! [`Payload`] once the payload has passed the relevant gate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::payload::Payload;
use super::validation::{IncompletePayload, Schema};

/// Kind of resource handled by an operation, used in logs and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Movie,
    User,
}

impl ResourceKind {
    /// Lower-case singular name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::User => "user",
        }
    }

    /// Name of the backing table and the URL collection segment.
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Movie => "movies",
            Self::User => "users",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage-assigned record identifier.
///
/// Backed by the `SERIAL` primary key columns, so any `i32` is a valid
/// identifier shape even when no row carries it.
///
/// # Examples
/// ```
/// use cinema_api::domain::ResourceId;
///
/// let id: ResourceId = "42".parse().expect("integer id");
/// assert_eq!(id.get(), 42);
/// assert!("abc".parse::<ResourceId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(i32);

impl ResourceId {
    /// Wrap a primary key value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The primary key value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a path segment cannot be read as a [`ResourceId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{raw}` is not a valid resource identifier")]
pub struct ResourceIdError {
    raw: String,
}

impl FromStr for ResourceId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self).map_err(|_| ResourceIdError {
            raw: s.to_owned(),
        })
    }
}

/// A record as held by storage: the identifier plus the resource fields.
///
/// Serialises flat, e.g. `{"id": 3, "title": "Alien", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stored<R> {
    pub id: ResourceId,
    #[serde(flatten)]
    pub record: R,
}

impl<R> Stored<R> {
    /// Pair a record with the identifier storage assigned it.
    pub fn new(id: ResourceId, record: R) -> Self {
        Self { id, record }
    }
}

/// Behaviour every CRUD resource provides to the generic operation handlers.
pub trait Resource: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Which resource this is.
    const KIND: ResourceKind;

    /// Ordered field schema used by both the validator and the completeness
    /// gate.
    fn schema() -> &'static Schema;

    /// Build a typed record from a payload that carries every required field.
    ///
    /// # Errors
    ///
    /// Returns [`IncompletePayload`] naming every field that is missing,
    /// empty or of the wrong kind.
    fn from_payload(payload: &Payload) -> Result<Self, IncompletePayload>;

    /// Column and value of a storage-level uniqueness constraint, if any.
    fn unique_key(&self) -> Option<(&'static str, &str)> {
        None
    }
}
