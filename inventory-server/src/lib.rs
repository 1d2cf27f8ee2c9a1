//! inventory-server: classroom inventory over HTTP
//!
//! Rooms and the equipment items assigned to them, stored in Postgres,
//! with filtered listings and spreadsheet export.

pub mod config;
pub mod db;
pub mod export;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, DatabaseConfig, RetryPolicy};
pub use db::{Database, DbError};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
