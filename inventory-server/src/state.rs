//! Application state shared across handlers

use std::sync::Arc;
use std::time::Instant;

use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Database,
    started_at: Instant,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
