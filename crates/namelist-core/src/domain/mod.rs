//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod record;

pub use record::{NewRecord, Record, parse_record_id};
