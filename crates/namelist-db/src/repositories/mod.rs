//! Repository implementations using `SQLite` and `MySQL`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The connection pools are confined to this module and never exposed through
//! the port trait signatures.

mod mysql_name_repository;
mod row_mappers;
mod sqlite_name_repository;

pub use mysql_name_repository::MySqlNameRepository;
pub use sqlite_name_repository::SqliteNameRepository;
