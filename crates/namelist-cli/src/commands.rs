//! Available subcommands.

use clap::Subcommand;

/// Available commands for the namelist tool.
///
/// Running without a subcommand is the same as `serve`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the HTTP API (and the browser client when its assets are found)
    #[default]
    Serve,

    /// Print every stored record
    List,
}
