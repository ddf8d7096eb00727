//! Serve command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;
use namelist_axum::{ServerConfig, start_server};
use tracing::info;

use crate::parser::{ServerArgs, StoreArgs};

/// Locations checked for the browser client, relative to the working directory.
const STATIC_DIR_CANDIDATES: [&str; 2] = ["web", "crates/namelist-axum/web"];

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(server: ServerArgs, store: &StoreArgs) -> Result<()> {
    let config = server_config(server, store, Path::new("."));

    match config.static_dir {
        Some(ref dir) => info!(static_dir = %dir.display(), "Browser client enabled"),
        None => info!("No browser client assets found; serving API only"),
    }

    start_server(config).await
}

/// Build the server config, resolving the static directory:
/// api-only flag > explicit directory > first candidate under `base` holding an `index.html`.
pub fn server_config(server: ServerArgs, store: &StoreArgs, base: &Path) -> ServerConfig {
    let static_dir = if server.api_only {
        None
    } else {
        server.static_dir.or_else(|| find_static_dir(base))
    };

    ServerConfig {
        bind_address: server.bind_address,
        port: server.port,
        static_dir,
        ..ServerConfig::with_store(store.store_config())
    }
}

fn find_static_dir(base: &Path) -> Option<PathBuf> {
    STATIC_DIR_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.join("index.html").is_file())
}
