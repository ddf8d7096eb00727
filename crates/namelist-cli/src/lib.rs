#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary entry point
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use parser::{Cli, ServerArgs, StoreArgs};
