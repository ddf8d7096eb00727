#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod config;
pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use config::{DEFAULT_MYSQL_PORT, MySqlSettings, StoreConfig, StoreConfigError};

// Re-export repository implementations
pub use repositories::{MySqlNameRepository, SqliteNameRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
