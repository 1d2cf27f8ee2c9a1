//! Command implementations for the inventory CLI

pub mod export;
pub mod init_db;
pub mod serve;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use inventory_server::config::{database_url_from_env, DEFAULT_MAX_CONNECTIONS};
use inventory_server::{DatabaseConfig, RetryPolicy};

pub use export::run_export;
pub use init_db::run_init_db;
pub use serve::run_serve;

/// Database connection flags shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides DATABASE_URL, POSTGRESQL_URL, POSTGRES_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Connection attempts before giving up
    #[arg(long, default_value_t = 5)]
    pub retry_attempts: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, default_value_t = 3)]
    pub retry_delay_secs: u64,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve the connection target from the flag or the environment.
    pub fn to_config(&self) -> Result<DatabaseConfig> {
        let url = match &self.database_url {
            Some(url) => url.clone(),
            None => database_url_from_env().context(
                "No database configured. Set via --database-url, DATABASE_URL, or a .env file",
            )?,
        };

        Ok(DatabaseConfig::new(url)
            .with_max_connections(self.max_connections)
            .with_retry(RetryPolicy::new(
                self.retry_attempts,
                Duration::from_secs(self.retry_delay_secs),
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_environment() {
        let args = DatabaseArgs {
            database_url: Some("postgres://flag/db".into()),
            retry_attempts: 2,
            retry_delay_secs: 1,
            max_connections: 3,
        };
        let config = args.to_config().unwrap();

        assert_eq!(config.url, "postgresql://flag/db");
        assert_eq!(config.max_connections, 3);
        assert_eq!(config.retry, RetryPolicy::new(2, Duration::from_secs(1)));
    }
}
