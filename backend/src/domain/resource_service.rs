//! Operation handlers shared by every resource.
//!
//! [`ResourceService`] owns the contract for list, get, create, replace and
//! delete: which gate runs, in which order, and which [`ResourceError`] a
//! storage failure becomes. Each operation makes at most one attempt per
//! storage call and never retries.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::error::ResourceError;
use super::payload::Payload;
use super::ports::{RepositoryError, ResourceRepository};
use super::resource::{Resource, ResourceId, Stored};

/// Extra gate applied before a get-by-id lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupGuard {
    /// Look the record up directly.
    #[default]
    None,
    /// Run the create validator against the request body first and answer
    /// with its errors. A bodiless lookup therefore always fails validation;
    /// this keeps the legacy users endpoint behaviour available.
    ValidateBody,
}

/// Generic operation handlers for one resource kind.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use cinema_api::domain::{Movie, ResourceService};
/// use cinema_api::outbound::memory::InMemoryRepository;
///
/// let movies: ResourceService<Movie> =
///     ResourceService::new(Arc::new(InMemoryRepository::<Movie>::new()));
/// # let _ = movies;
/// ```
#[derive(Clone)]
pub struct ResourceService<R: Resource> {
    repository: Arc<dyn ResourceRepository<R>>,
    lookup_guard: LookupGuard,
}

impl<R: Resource> ResourceService<R> {
    /// Create a service over the given storage accessor.
    pub fn new(repository: Arc<dyn ResourceRepository<R>>) -> Self {
        Self {
            repository,
            lookup_guard: LookupGuard::None,
        }
    }

    /// Apply a gate in front of get-by-id.
    #[must_use]
    pub fn with_lookup_guard(mut self, lookup_guard: LookupGuard) -> Self {
        self.lookup_guard = lookup_guard;
        self
    }

    /// Gate currently applied in front of get-by-id.
    pub fn lookup_guard(&self) -> LookupGuard {
        self.lookup_guard
    }

    /// Run the create-time validator.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] carrying every failing field in
    /// schema order.
    pub fn validate(payload: &Payload) -> Result<(), ResourceError> {
        let errors = R::schema().validate(payload);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ResourceError::Validation(errors))
        }
    }

    /// Every record of this resource.
    ///
    /// # Errors
    ///
    /// Any storage failure becomes [`ResourceError::StorageUnavailable`].
    pub async fn list(&self) -> Result<Vec<Stored<R>>, ResourceError> {
        let records = self
            .repository
            .list()
            .await
            .map_err(|err| read_failure::<R>("list", &err))?;
        debug!(resource = %R::KIND, count = records.len(), "listed records");
        Ok(records)
    }

    /// Fetch one record by its raw path identifier.
    ///
    /// An identifier that is not an integer matches no row.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Validation`] when the lookup guard rejects `body`.
    /// - [`ResourceError::NotFound`] when no row matches.
    /// - [`ResourceError::StorageUnavailable`] on storage failure.
    pub async fn get(&self, raw_id: &str, body: &Payload) -> Result<Stored<R>, ResourceError> {
        if self.lookup_guard == LookupGuard::ValidateBody {
            Self::validate(body)?;
        }
        let Some(id) = parse_lookup_id::<R>(raw_id) else {
            return Err(ResourceError::not_found(R::KIND, raw_id));
        };
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| read_failure::<R>("get", &err))?
            .ok_or_else(|| ResourceError::not_found(R::KIND, raw_id))
    }

    /// Validate and insert a new record.
    ///
    /// Storage is never reached when validation fails.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Validation`] for any failing field.
    /// - [`ResourceError::StorageRejection`] when storage refuses the row.
    /// - [`ResourceError::StorageUnavailable`] on connectivity failure.
    pub async fn create(&self, payload: &Payload) -> Result<ResourceId, ResourceError> {
        Self::validate(payload)?;
        let record = R::from_payload(payload)?;
        let id = self
            .repository
            .insert(&record)
            .await
            .map_err(|err| write_failure::<R>("create", &err))?;
        info!(resource = %R::KIND, %id, "record created");
        Ok(id)
    }

    /// Replace every field of an existing record.
    ///
    /// Existence is checked before completeness; either gate failing leaves
    /// storage untouched.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] when no row matches (also when the row
    ///   vanishes between the existence check and the write).
    /// - [`ResourceError::IncompletePayload`] when a full row cannot be built.
    /// - [`ResourceError::StorageRejection`] when storage refuses the row.
    /// - [`ResourceError::StorageUnavailable`] on connectivity failure.
    pub async fn replace(&self, raw_id: &str, payload: &Payload) -> Result<(), ResourceError> {
        let Some(id) = parse_lookup_id::<R>(raw_id) else {
            return Err(ResourceError::not_found(R::KIND, raw_id));
        };
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| read_failure::<R>("replace", &err))?;
        if existing.is_none() {
            return Err(ResourceError::not_found(R::KIND, raw_id));
        }

        let record = R::from_payload(payload)?;
        let replaced = self
            .repository
            .replace(id, &record)
            .await
            .map_err(|err| write_failure::<R>("replace", &err))?;
        if !replaced {
            debug!(resource = %R::KIND, %id, "record vanished before replace");
            return Err(ResourceError::not_found(R::KIND, raw_id));
        }
        info!(resource = %R::KIND, %id, "record replaced");
        Ok(())
    }

    /// Delete a record by its raw path identifier.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::StorageUnavailable`] when `raw_id` cannot be used as
    ///   a storage key, or on storage failure.
    /// - [`ResourceError::NotFound`] when no row matches.
    pub async fn delete(&self, raw_id: &str) -> Result<(), ResourceError> {
        let id = raw_id.parse::<ResourceId>().map_err(|err| {
            error!(resource = %R::KIND, raw_id, error = %err, "delete with unusable identifier");
            ResourceError::storage_unavailable(err.to_string())
        })?;
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|err| read_failure::<R>("delete", &err))?;
        if !deleted {
            return Err(ResourceError::not_found(R::KIND, raw_id));
        }
        info!(resource = %R::KIND, %id, "record deleted");
        Ok(())
    }
}

fn parse_lookup_id<R: Resource>(raw_id: &str) -> Option<ResourceId> {
    match raw_id.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(resource = %R::KIND, error = %err, "identifier matches no row");
            None
        }
    }
}

fn read_failure<R: Resource>(operation: &'static str, err: &RepositoryError) -> ResourceError {
    error!(resource = %R::KIND, operation, error = %err, "storage operation failed");
    ResourceError::storage_unavailable(err.to_string())
}

fn write_failure<R: Resource>(operation: &'static str, err: &RepositoryError) -> ResourceError {
    match err {
        RepositoryError::Rejected { message } => {
            warn!(resource = %R::KIND, operation, error = %message, "storage rejected write");
            ResourceError::storage_rejection(message.clone())
        }
        _ => read_failure::<R>(operation, err),
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
