//! Port abstraction for resource persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Resource, ResourceId, Stored};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by resource repository adapters.
    pub enum RepositoryError {
        /// Storage could not be reached or a connection was lost.
        Connection => "resource storage connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "resource storage query failed: {message}",
        /// Storage refused a write. The message is the storage's own text.
        Rejected => "{message}",
    }
}

/// Storage accessor for one resource kind.
///
/// Each method is a single logical storage operation; atomicity is the
/// adapter's concern.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Every stored record, ordered by identifier.
    async fn list(&self) -> Result<Vec<Stored<R>>, RepositoryError>;

    /// Fetch one record by identifier.
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Stored<R>>, RepositoryError>;

    /// Insert a new record and return its storage-assigned identifier.
    async fn insert(&self, record: &R) -> Result<ResourceId, RepositoryError>;

    /// Overwrite every field of an existing record.
    ///
    /// Returns `false` when no row carries `id`.
    async fn replace(&self, id: ResourceId, record: &R) -> Result<bool, RepositoryError>;

    /// Remove a record. Returns `false` when no row carries `id`.
    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError>;
}
