//! `SQLite` implementation of the `NameRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use namelist_core::{NameRepository, NewRecord, Record, RepositoryError, expect_single_row};

use super::row_mappers::{RECORD_SELECT_COLUMNS, map_sqlx_error, sqlite_row_to_record};

/// `SQLite` implementation of the `NameRepository` trait.
pub struct SqliteNameRepository {
    pool: SqlitePool,
}

impl SqliteNameRepository {
    /// Create a new `SQLite` name repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NameRepository for SqliteNameRepository {
    async fn list(&self) -> Result<Vec<Record>, RepositoryError> {
        let query = format!("SELECT {RECORD_SELECT_COLUMNS} FROM names ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(sqlite_row_to_record).collect()
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Record>, RepositoryError> {
        let query =
            format!("SELECT {RECORD_SELECT_COLUMNS} FROM names WHERE name = ? ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(sqlite_row_to_record).collect()
    }

    async fn insert(&self, record: &NewRecord) -> Result<Record, RepositoryError> {
        let result = sqlx::query("INSERT INTO names (name, date_added) VALUES (?, ?)")
            .bind(&record.name)
            .bind(record.date_added)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(record.clone().into_record(result.last_insert_rowid()))
    }

    async fn update_name(&self, id: i64, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE names SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        expect_single_row(result.rows_affected(), id)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM names WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        expect_single_row(result.rows_affected(), id)
    }
}
