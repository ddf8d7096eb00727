//! Composition utilities for building a `NameService` with database backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite`/`MySQL` repositories. It is focused purely on construction
//! and should not contain any domain logic.

use std::sync::Arc;

use namelist_core::NameService;
use sqlx::SqlitePool;

use crate::config::StoreConfig;
use crate::repositories::SqliteNameRepository;
use crate::setup::setup_database;

/// Factory for creating services with database backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Open the configured store and build the name service over it.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// a fully composed `NameService`.
    pub async fn connect(config: &StoreConfig) -> anyhow::Result<NameService> {
        let repo = setup_database(config).await?;
        Ok(NameService::new(repo))
    }

    /// Build a name service over an already-open `SQLite` pool.
    pub fn sqlite_name_service(pool: SqlitePool) -> NameService {
        NameService::new(Arc::new(SqliteNameRepository::new(pool)))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a name repository using this test database.
    pub fn name_repository(&self) -> SqliteNameRepository {
        SqliteNameRepository::new(self.pool.clone())
    }

    /// Create a name service using this test database.
    pub fn name_service(&self) -> NameService {
        CoreFactory::sqlite_name_service(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namelist_core::NameRepository;

    #[tokio::test]
    async fn test_service_and_repository_share_the_database() {
        let db = TestDb::new().await.unwrap();
        let service = db.name_service();

        let record = service.insert("Hasan").await.unwrap();

        let seen = db.name_repository().list().await.unwrap();
        assert_eq!(seen, vec![record]);
    }

    #[tokio::test]
    async fn test_connect_in_memory_url() {
        let config = StoreConfig::Url("sqlite::memory:".to_string());
        let service = CoreFactory::connect(&config).await.unwrap();
        assert!(service.get_all().await.unwrap().is_empty());
    }
}
