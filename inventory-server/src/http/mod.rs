//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown, releasing the database pool afterwards
//! - JSON error responses, redirects after form submissions

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
