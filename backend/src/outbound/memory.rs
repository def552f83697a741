//! In-process resource storage.
//!
//! Implements [`ResourceRepository`] over a mutex-guarded map. Identifiers are
//! assigned from a monotonically increasing counter starting at 1 and are
//! never reused. Uniqueness constraints declared by
//! [`Resource::unique_key`] are enforced with PostgreSQL-style messages so the
//! HTTP contract behaves the same as against the Diesel adapters.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{RepositoryError, ResourceRepository};
use crate::domain::{Resource, ResourceId, Stored};

struct Table<R> {
    next_id: i32,
    rows: BTreeMap<ResourceId, R>,
}

/// Mutex-guarded in-memory table for one resource kind.
pub struct InMemoryRepository<R> {
    table: Mutex<Table<R>>,
}

impl<R: Resource> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<R: Resource> InMemoryRepository<R> {
    /// Empty repository whose first record gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `records`, assigned ids `1..=n`.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let repository = Self::default();
        if let Ok(mut table) = repository.table.lock() {
            for record in records {
                let id = ResourceId::new(table.next_id);
                table.next_id += 1;
                table.rows.insert(id, record);
            }
        }
        repository
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table<R>>, RepositoryError> {
        self.table
            .lock()
            .map_err(|_| RepositoryError::connection("in-memory table lock poisoned"))
    }
}

fn check_unique<R: Resource>(
    table: &Table<R>,
    record: &R,
    except: Option<ResourceId>,
) -> Result<(), RepositoryError> {
    let Some((column, value)) = record.unique_key() else {
        return Ok(());
    };
    let clash = table.rows.iter().any(|(id, existing)| {
        Some(*id) != except && existing.unique_key().is_some_and(|(_, other)| other == value)
    });
    if clash {
        return Err(RepositoryError::rejected(format!(
            "duplicate key value violates unique constraint \"{}_{column}_key\"",
            R::KIND.collection()
        )));
    }
    Ok(())
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryRepository<R> {
    async fn list(&self) -> Result<Vec<Stored<R>>, RepositoryError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .map(|(id, record)| Stored::new(*id, record.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Stored<R>>, RepositoryError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .get(&id)
            .map(|record| Stored::new(id, record.clone())))
    }

    async fn insert(&self, record: &R) -> Result<ResourceId, RepositoryError> {
        let mut table = self.lock()?;
        check_unique(&table, record, None)?;
        let id = ResourceId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::rejected("identifier sequence exhausted"))?;
        table.rows.insert(id, record.clone());
        Ok(id)
    }

    async fn replace(&self, id: ResourceId, record: &R) -> Result<bool, RepositoryError> {
        let mut table = self.lock()?;
        if !table.rows.contains_key(&id) {
            return Ok(false);
        }
        check_unique(&table, record, Some(id))?;
        table.rows.insert(id, record.clone());
        Ok(true)
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        let mut table = self.lock()?;
        Ok(table.rows.remove(&id).is_some())
    }
}
