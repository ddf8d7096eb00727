//! Name repository trait definition.
//!
//! This port defines the interface for record persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewRecord, Record};

/// Repository for name record persistence.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Every statement is parameterized; values are never spliced into SQL
/// - One statement per call, no transactions
#[async_trait]
pub trait NameRepository: Send + Sync {
    /// List every record, ordered by ID ascending.
    async fn list(&self) -> Result<Vec<Record>, RepositoryError>;

    /// List records whose name equals `name` exactly, ordered by ID.
    ///
    /// Returns an empty vector when nothing matches.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Record>, RepositoryError>;

    /// Insert a new record and return it with the store-assigned ID.
    async fn insert(&self, record: &NewRecord) -> Result<Record, RepositoryError>;

    /// Replace the name of the record with the given ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no row matched.
    async fn update_name(&self, id: i64, name: &str) -> Result<(), RepositoryError>;

    /// Delete the record with the given ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no row matched.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Map an affected-row count from a single-row statement to a result.
///
/// Exactly one row is success; zero rows is `NotFound`. More than one row
/// means the primary key constraint is missing from the store.
pub fn expect_single_row(rows_affected: u64, id: i64) -> Result<(), RepositoryError> {
    match rows_affected {
        1 => Ok(()),
        0 => Err(RepositoryError::NotFound(format!("Record with ID {id}"))),
        n => Err(RepositoryError::Constraint(format!(
            "{n} rows matched record ID {id}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_single_row() {
        assert!(expect_single_row(1, 4).is_ok());
        assert!(matches!(
            expect_single_row(0, 4),
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            expect_single_row(2, 4),
            Err(RepositoryError::Constraint(_))
        ));
    }
}
