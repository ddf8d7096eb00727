//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, then dispatches.

use clap::Parser;

use namelist_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_json);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "namelist starting");

    match cli.command.unwrap_or_default() {
        Commands::Serve => handlers::serve::execute(cli.server, &cli.store).await,
        Commands::List => handlers::list::execute(&cli.store.store_config()).await,
    }
}
