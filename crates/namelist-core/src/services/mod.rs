//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over ports - they don't know about
//! concrete implementations.

mod name_service;

pub use name_service::NameService;
