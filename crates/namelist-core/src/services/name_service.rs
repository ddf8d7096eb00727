//! Name service - the data access facade used by every adapter.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{NewRecord, Record, parse_record_id};
use crate::ports::{CoreError, NameRepository, RepositoryError};

/// Service for name record operations.
///
/// Constructed once at the composition root and shared by reference with
/// every request handler. Store failures are logged here, at the data
/// access boundary, before they reach an adapter.
pub struct NameService {
    repo: Arc<dyn NameRepository>,
}

impl NameService {
    /// Create a new name service.
    pub fn new(repo: Arc<dyn NameRepository>) -> Self {
        Self { repo }
    }

    /// Insert a record with the current time as its `date_added`.
    pub async fn insert(&self, name: &str) -> Result<Record, CoreError> {
        let new = NewRecord::now(name);
        self.repo.insert(&new).await.map_err(|e| {
            error!(error = %e, "Failed to insert record");
            CoreError::from(e)
        })
    }

    /// Get every record, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Record>, CoreError> {
        self.repo.list().await.map_err(|e| {
            error!(error = %e, "Failed to list records");
            CoreError::from(e)
        })
    }

    /// Get the records whose name equals `name` exactly.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Record>, CoreError> {
        self.repo.search_by_name(name).await.map_err(|e| {
            error!(name, error = %e, "Failed to search records");
            CoreError::from(e)
        })
    }

    /// Rename the record identified by `id`.
    ///
    /// Returns `true` iff exactly one record was updated. An unparseable
    /// ID, an ID with no matching record, and a store failure all yield
    /// `false`.
    pub async fn update_name(&self, id: &str, name: &str) -> bool {
        let Some(id) = parse_record_id(id) else {
            debug!(raw_id = id, "Update skipped: not a record ID");
            return false;
        };
        outcome(id, "update", self.repo.update_name(id, name).await)
    }

    /// Delete the record identified by `id`.
    ///
    /// Same outcome rules as [`NameService::update_name`].
    pub async fn delete_by_id(&self, id: &str) -> bool {
        let Some(id) = parse_record_id(id) else {
            debug!(raw_id = id, "Delete skipped: not a record ID");
            return false;
        };
        outcome(id, "delete", self.repo.delete(id).await)
    }
}

fn outcome(id: i64, op: &str, result: Result<(), RepositoryError>) -> bool {
    match result {
        Ok(()) => true,
        Err(RepositoryError::NotFound(_)) => {
            debug!(id, op, "No record matched");
            false
        }
        Err(e) => {
            error!(id, op, error = %e, "Record write failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockNameRepo {
        records: Mutex<Vec<Record>>,
        fail: bool,
    }

    impl MockNameRepo {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Storage("connection lost".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NameRepository for MockNameRepo {
        async fn list(&self) -> Result<Vec<Record>, RepositoryError> {
            self.check()?;
            Ok(self.records.lock().unwrap().clone())
        }

        async fn search_by_name(&self, name: &str) -> Result<Vec<Record>, RepositoryError> {
            self.check()?;
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.name == name)
                .cloned()
                .collect())
        }

        async fn insert(&self, record: &NewRecord) -> Result<Record, RepositoryError> {
            self.check()?;
            let mut records = self.records.lock().unwrap();
            let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            let persisted = record.clone().into_record(id);
            records.push(persisted.clone());
            Ok(persisted)
        }

        async fn update_name(&self, id: i64, name: &str) -> Result<(), RepositoryError> {
            self.check()?;
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| RepositoryError::NotFound(format!("Record with ID {id}")))?;
            record.name = name.to_string();
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.check()?;
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(RepositoryError::NotFound(format!("Record with ID {id}")));
            }
            Ok(())
        }
    }

    fn service() -> NameService {
        NameService::new(Arc::new(MockNameRepo::default()))
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let service = service();
        let first = service.insert("Hasan").await.unwrap();
        let second = service.insert("Hasan").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Hasan");
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_accepts_string_ids() {
        let service = service();
        let record = service.insert("Hasan").await.unwrap();

        assert!(service.update_name(&record.id.to_string(), "Hasan2").await);

        let all = service.get_all().await.unwrap();
        assert_eq!(all[0].name, "Hasan2");
        assert_eq!(all[0].date_added, record.date_added);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_return_false() {
        let service = service();
        assert!(!service.update_name("404", "nobody").await);
        assert!(!service.delete_by_id("404").await);
    }

    #[tokio::test]
    async fn test_unparseable_id_returns_false() {
        let service = service();
        service.insert("Hasan").await.unwrap();

        assert!(!service.delete_by_id("undefined").await);
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_search_is_empty() {
        let service = service();
        let record = service.insert("Hasan").await.unwrap();

        assert!(service.delete_by_id(&record.id.to_string()).await);
        assert!(service.search_by_name("Hasan").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_folds_writes_and_propagates_reads() {
        let service = NameService::new(Arc::new(MockNameRepo::failing()));

        assert!(!service.update_name("1", "x").await);
        assert!(!service.delete_by_id("1").await);
        assert!(matches!(
            service.get_all().await,
            Err(CoreError::Repository(RepositoryError::Storage(_)))
        ));
        assert!(service.insert("x").await.is_err());
        assert!(service.search_by_name("x").await.is_err());
    }
}
