//! PostgreSQL-backed user storage using Diesel ORM.
//!
//! A duplicate email surfaces as `RepositoryError::Rejected` carrying the
//! `users_email_key` violation message.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, ResourceRepository};
use crate::domain::{ResourceId, Stored, User};

use super::diesel_error_mapping::{map_pool_error, map_read_error, map_write_error};
use super::models::{UserRow, UserWrite};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of [`ResourceRepository`] for users.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<User> for DieselUserRepository {
    async fn list(&self) -> Result<Vec<Stored<User>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_read_error(err, "list users"))?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Stored<User>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_read_error(err, "find user"))?;
        Ok(row.map(Stored::from))
    }

    async fn insert(&self, record: &User) -> Result<ResourceId, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i32 = diesel::insert_into(users::table)
            .values(UserWrite::from(record))
            .returning(users::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, "insert user"))?;
        Ok(ResourceId::new(id))
    }

    async fn replace(&self, id: ResourceId, record: &User) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(users::table.find(id.get()))
            .set(UserWrite::from(record))
            .execute(&mut conn)
            .await
            .map_err(|err| map_write_error(err, "update user"))?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_read_error(err, "delete user"))?;
        Ok(deleted > 0)
    }
}
