//! Main CLI parser and top-level argument handling.
//!
//! Every option is global and falls back to an environment variable, so
//! a `.env` file configures the server the same way flags do.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Args, Parser};
use namelist_axum::DEFAULT_PORT;
use namelist_db::{DEFAULT_MYSQL_PORT, MySqlSettings, StoreConfig};

use crate::commands::Commands;

/// Command-line interface definition for namelist.
#[derive(Debug, Parser)]
#[command(name = "namelist")]
#[command(about = "Store a list of names and serve them over HTTP")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    /// Emit logs as newline-delimited JSON
    #[arg(long, env = "LOG_JSON", global = true, value_parser = FalseyValueParser::new())]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where records are stored.
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Explicit connection URL (sqlite: or mysql:), overrides the db-* options
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// MySQL host; selects the MySQL store when set
    #[arg(long = "db-host", env = "HOST", global = true)]
    pub db_host: Option<String>,

    /// MySQL user
    #[arg(long = "db-user", env = "USER", default_value = "root", global = true)]
    pub db_user: String,

    /// MySQL password
    #[arg(long = "db-password", env = "PASSWORD", default_value = "", hide_env_values = true, global = true)]
    pub db_password: String,

    /// Database name (MySQL schema, or SQLite file stem)
    #[arg(long = "db-name", env = "DATABASE", default_value = "names", global = true)]
    pub db_name: String,

    /// MySQL port
    #[arg(long = "db-port", env = "DB_PORT", default_value_t = DEFAULT_MYSQL_PORT, global = true)]
    pub db_port: u16,
}

impl StoreArgs {
    /// Resolve the store: URL first, then a MySQL host, then the SQLite file.
    pub fn store_config(&self) -> StoreConfig {
        if let Some(url) = non_empty(self.database_url.as_deref()) {
            return StoreConfig::Url(url.to_string());
        }

        if let Some(host) = non_empty(self.db_host.as_deref()) {
            return StoreConfig::MySql(MySqlSettings {
                host: host.to_string(),
                port: self.db_port,
                user: self.db_user.clone(),
                password: self.db_password.clone(),
                database: self.db_name.clone(),
            });
        }

        StoreConfig::Sqlite {
            path: PathBuf::from(format!("{}.db", self.db_name)),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// How the HTTP server listens.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "BIND_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), global = true)]
    pub bind_address: IpAddr,

    /// Directory with the browser client (index.html, index.js, stylesheet.css)
    #[arg(long, env = "STATIC_DIR", global = true)]
    pub static_dir: Option<PathBuf>,

    /// Serve API endpoints only
    #[arg(long, global = true)]
    pub api_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn store_args() -> StoreArgs {
        StoreArgs {
            database_url: None,
            db_host: None,
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "names".to_string(),
            db_port: DEFAULT_MYSQL_PORT,
        }
    }

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::parse_from([
            "namelist",
            "serve",
            "--port",
            "8080",
            "--bind-address",
            "127.0.0.1",
            "--static-dir",
            "/srv/web",
        ]);
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.server.bind_address.to_string(), "127.0.0.1");
        assert_eq!(cli.server.static_dir, Some(PathBuf::from("/srv/web")));
    }

    #[test]
    fn test_list_subcommand() {
        let cli = Cli::parse_from(["namelist", "list", "--database-url", "sqlite::memory:"]);
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(
            cli.store.store_config(),
            StoreConfig::Url("sqlite::memory:".to_string())
        );
    }

    #[test]
    fn test_default_store_is_sqlite_file() {
        assert_eq!(
            store_args().store_config(),
            StoreConfig::Sqlite {
                path: PathBuf::from("names.db")
            }
        );
    }

    #[test]
    fn test_host_selects_mysql() {
        let args = StoreArgs {
            db_host: Some("db.internal".to_string()),
            db_password: "secret".to_string(),
            ..store_args()
        };
        let StoreConfig::MySql(settings) = args.store_config() else {
            panic!("expected MySQL store");
        };
        assert_eq!(settings.host, "db.internal");
        assert_eq!(settings.port, 3306);
        assert_eq!(settings.user, "root");
        assert_eq!(settings.database, "names");
    }

    #[test]
    fn test_url_wins_over_host() {
        let args = StoreArgs {
            database_url: Some("mysql://u:p@h/names".to_string()),
            db_host: Some("ignored".to_string()),
            ..store_args()
        };
        assert_eq!(
            args.store_config(),
            StoreConfig::Url("mysql://u:p@h/names".to_string())
        );
    }

    #[test]
    fn test_blank_host_is_ignored() {
        let args = StoreArgs {
            db_host: Some("  ".to_string()),
            ..store_args()
        };
        assert!(matches!(args.store_config(), StoreConfig::Sqlite { .. }));
    }
}
