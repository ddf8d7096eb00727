//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The store connection and the `NameService`
//! over it are created here exactly once and shared with every handler.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use namelist_core::NameService;
use namelist_db::{CoreFactory, StoreConfig};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_address: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
    /// Which store to open.
    pub store: StoreConfig,
    /// Optional path to the browser client assets.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Config listening on all interfaces at the default port.
    pub fn with_store(store: StoreConfig) -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            store,
            static_dir: None,
        }
    }

    /// Socket address to bind.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The data access facade.
    pub names: Arc<NameService>,
}

impl AxumContext {
    /// Wrap an already-built service.
    pub fn new(names: NameService) -> Self {
        Self {
            names: Arc::new(names),
        }
    }
}

/// Bootstrap the Axum server: open the store and build the service.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "namelist.bootstrap",
        backend = config.store.backend(),
        location = %config.store.describe(),
        "Connecting to store"
    );

    let names = CoreFactory::connect(&config.store).await?;
    Ok(AxumContext::new(names))
}

/// Start the web server on the configured address.
///
/// If `config.static_dir` is set, also serves the browser client.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving browser client from: {}", static_dir.display());
        crate::routes::create_client_router(ctx, static_dir)
    } else {
        crate::routes::create_router(ctx)
    };

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("namelist server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
