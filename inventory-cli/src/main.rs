//! inventory CLI - classroom inventory server and tooling
//!
//! - `serve`: run the HTTP server (rooms, items, spreadsheet export)
//! - `init-db`: create the tables and exit
//! - `export`: write a filtered `.xlsx` export to disk

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "inventory",
    author,
    version,
    about = "Track classrooms and the equipment assigned to them"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the rooms and items tables if missing
    InitDb(commands::init_db::InitDbArgs),
    /// Export rooms or items to an .xlsx file
    Export(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
        Commands::Export(args) => commands::run_export(args).await?,
    }
    Ok(())
}
