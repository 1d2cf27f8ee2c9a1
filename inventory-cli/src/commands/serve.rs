//! HTTP server command
//!
//! Runs the inventory HTTP server until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use inventory_server::{run_server, Database, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
///
/// Without a database URL the server still starts, so `/debug` can show what
/// is missing; data routes answer 503 until it is configured.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = match args.db.to_config() {
        Ok(config) => Database::new(config),
        Err(e) => {
            tracing::warn!("{:#}", e);
            Database::unconfigured()
        }
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };
    tracing::info!("Starting server on port {}", args.port);

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}
