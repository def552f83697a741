//! PostgreSQL-backed movie storage using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, ResourceRepository};
use crate::domain::{Movie, ResourceId, Stored};

use super::diesel_error_mapping::{map_pool_error, map_read_error, map_write_error};
use super::models::{MovieRow, MovieWrite};
use super::pool::DbPool;
use super::schema::movies;

/// Diesel-backed implementation of [`ResourceRepository`] for movies.
#[derive(Clone)]
pub struct DieselMovieRepository {
    pool: DbPool,
}

impl DieselMovieRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<Movie> for DieselMovieRepository {
    async fn list(&self) -> Result<Vec<Stored<Movie>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MovieRow> = movies::table
            .select(MovieRow::as_select())
            .order(movies::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_read_error(err, "list movies"))?;
        Ok(rows.into_iter().map(Stored::from).collect())
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Stored<Movie>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MovieRow> = movies::table
            .find(id.get())
            .select(MovieRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_read_error(err, "find movie"))?;
        Ok(row.map(Stored::from))
    }

    async fn insert(&self, record: &Movie) -> Result<ResourceId, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i32 = diesel::insert_into(movies::table)
            .values(MovieWrite::from(record))
            .returning(movies::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, "insert movie"))?;
        Ok(ResourceId::new(id))
    }

    async fn replace(&self, id: ResourceId, record: &Movie) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(movies::table.find(id.get()))
            .set(MovieWrite::from(record))
            .execute(&mut conn)
            .await
            .map_err(|err| map_write_error(err, "update movie"))?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(movies::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_read_error(err, "delete movie"))?;
        Ok(deleted > 0)
    }
}
