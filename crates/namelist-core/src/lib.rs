#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewRecord, Record, parse_record_id};
pub use ports::{CoreError, NameRepository, RepositoryError, expect_single_row};
pub use services::NameService;
