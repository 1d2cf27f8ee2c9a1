//! Create the inventory tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use inventory_server::Database;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db = Database::new(args.db.to_config()?);

    db.connect()
        .await
        .context("Failed to initialize database")?;
    db.close().await;

    println!("Database initialized successfully!");
    Ok(())
}
