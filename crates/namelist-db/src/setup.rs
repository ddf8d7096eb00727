//! Database setup and initialization.
//!
//! Opens the single long-lived store connection and ensures the `names`
//! table exists. Entry points call [`setup_database`] with the resolved
//! [`StoreConfig`].

use std::sync::Arc;

use anyhow::Result;
use namelist_core::NameRepository;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{MySqlPool, SqlitePool};

use crate::config::{ConnectOptions, StoreConfig};
use crate::repositories::{MySqlNameRepository, SqliteNameRepository};

/// Every store is served through exactly one connection.
const STORE_CONNECTIONS: u32 = 1;

/// Connect to the configured store, create the schema and return the
/// repository over it.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be turned into connect options
/// - The database cannot be opened or reached
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use namelist_db::{StoreConfig, setup_database};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = StoreConfig::Sqlite { path: "names.db".into() };
/// let repo = setup_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(config: &StoreConfig) -> Result<Arc<dyn NameRepository>> {
    if let StoreConfig::Sqlite { path } = config {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    let repo: Arc<dyn NameRepository> = match config.connect_options()? {
        ConnectOptions::Sqlite(options) => {
            Arc::new(SqliteNameRepository::new(setup_sqlite(options).await?))
        }
        ConnectOptions::MySql(options) => {
            Arc::new(MySqlNameRepository::new(setup_mysql(options).await?))
        }
    };

    tracing::info!(
        target: "namelist.db",
        backend = config.backend(),
        location = %config.describe(),
        "db connected"
    );

    Ok(repo)
}

/// Open a `SQLite` connection and create the schema.
pub async fn setup_sqlite(options: SqliteConnectOptions) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(STORE_CONNECTIONS)
        .min_connections(STORE_CONNECTIONS)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    create_sqlite_schema(&pool).await?;
    Ok(pool)
}

/// Open a `MySQL` connection and create the schema.
pub async fn setup_mysql(options: MySqlConnectOptions) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(STORE_CONNECTIONS)
        .min_connections(STORE_CONNECTIONS)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    create_mysql_schema(&pool).await?;
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema. The
/// pool holds its single connection for its whole life, so the data survives
/// between queries.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use std::str::FromStr;

    setup_sqlite(SqliteConnectOptions::from_str("sqlite::memory:")?).await
}

/// Creates the `SQLite` schema. Safe to call multiple times.
async fn create_sqlite_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS names (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            date_added TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Creates the `MySQL` schema. Safe to call multiple times.
async fn create_mysql_schema(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS names (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            date_added DATETIME(3) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
