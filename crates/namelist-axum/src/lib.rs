#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, DEFAULT_PORT, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use extract::JsonOrForm;
pub use routes::{create_client_router, create_router};
pub use state::AppState;
