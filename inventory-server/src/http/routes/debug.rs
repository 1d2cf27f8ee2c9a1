//! Deployment diagnostics
//!
//! Shows which database-related environment variables the process sees,
//! without leaking credentials.

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::redact_url;
use crate::state::AppState;

const HIDDEN: &str = "***HIDDEN***";

#[derive(Serialize)]
pub struct DebugResponse {
    pub status: &'static str,
    pub environment_variables: BTreeMap<String, String>,
    pub database_url_exists: bool,
}

fn is_relevant(key: &str) -> bool {
    let key = key.to_uppercase();
    ["DATABASE", "POSTGRES", "URL"]
        .iter()
        .any(|needle| key.contains(needle))
}

fn is_secret(key: &str) -> bool {
    let key = key.to_uppercase();
    key.contains("PASSWORD") || key.contains("SECRET")
}

/// Keep relevant variables; hide secrets and strip credentials from URLs.
pub fn collect_env<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter(|(key, _)| is_relevant(key))
        .map(|(key, value)| {
            let shown = if is_secret(&key) {
                HIDDEN.to_owned()
            } else {
                redact_url(&value)
            };
            (key, shown)
        })
        .collect()
}

/// GET /debug
async fn debug() -> Json<DebugResponse> {
    Json(DebugResponse {
        status: "running",
        environment_variables: collect_env(std::env::vars()),
        database_url_exists: std::env::var_os("DATABASE_URL").is_some(),
    })
}

/// Debug routes
pub fn router() -> Router<AppState> {
    Router::new().route("/debug", get(debug))
}
