//! Row mapping helpers shared by the repository implementations.

use chrono::{DateTime, Utc};
use namelist_core::{Record, RepositoryError};
use sqlx::Row;
use sqlx::error::ErrorKind;

/// Shared SELECT column list for record queries.
pub const RECORD_SELECT_COLUMNS: &str = "id, name, date_added";

/// Map a driver error into the storage-agnostic repository error.
///
/// Constraint violations reported by the database keep their own variant;
/// everything else (connection loss, syntax, decode) is a storage failure.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if !matches!(db_err.kind(), ErrorKind::Other) {
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::Storage(err.to_string())
}

/// Parse a `SQLite` row into a Record.
pub fn sqlite_row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<Record, RepositoryError> {
    Ok(Record {
        id: row.try_get::<i64, _>("id").map_err(map_sqlx_error)?,
        name: row.try_get::<String, _>("name").map_err(map_sqlx_error)?,
        date_added: row
            .try_get::<DateTime<Utc>, _>("date_added")
            .map_err(map_sqlx_error)?,
    })
}

/// Parse a `MySQL` row into a Record.
pub fn mysql_row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<Record, RepositoryError> {
    Ok(Record {
        id: row.try_get::<i64, _>("id").map_err(map_sqlx_error)?,
        name: row.try_get::<String, _>("name").map_err(map_sqlx_error)?,
        date_added: row
            .try_get::<DateTime<Utc>, _>("date_added")
            .map_err(map_sqlx_error)?,
    })
}
