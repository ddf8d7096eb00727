//! Command handlers.
//!
//! Each handler builds what it needs from the parsed arguments and
//! delegates the actual work to the axum and db crates.

pub mod list;
pub mod serve;
