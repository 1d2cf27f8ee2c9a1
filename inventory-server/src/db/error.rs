//! Database error type

use std::sync::Arc;

use crate::config::ConfigError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database unavailable after {attempts} attempt(s): {source}")]
    Unavailable {
        attempts: u32,
        #[source]
        source: Arc<sqlx::Error>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// True when the database could not be reached or is not configured.
    ///
    /// Covers connections lost after the pool was established, not just
    /// failed connects.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Unavailable { .. } | Self::Config(_) => true,
            Self::Sqlx(e) => is_connection_error(e),
            Self::NotFound { .. } => false,
        }
    }
}

/// sqlx errors that mean the server is gone rather than the query being wrong.
fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed
    )
}
