//! Custom Axum extractors
//!
//! Path and filter extractors reject before [`Db`] runs, so malformed
//! requests never wait on a database connection.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use sqlx::PgPool;

use super::error::ApiError;
use crate::models::{RoomFilter, RoomFilterParams, ValidationError};
use crate::state::AppState;

/// The shared pool, obtained before the handler body runs.
///
/// Connects lazily (with retry) on first use; an unreachable database
/// rejects the request with 503.
pub struct Db(pub PgPool);

impl FromRequestParts<AppState> for Db {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let pool = state.db().acquire().await?;
        Ok(Self(pool))
    }
}

/// `{room_id}` path segment. Anything but an integer is an unknown room.
pub struct RoomId(pub i32);

impl<S> FromRequestParts<S> for RoomId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "room",
                id: String::new(),
            })?;

        raw.parse()
            .map(Self)
            .map_err(|_| ApiError::NotFound { resource: "room", id: raw })
    }
}

/// `{item_id}/.../{room_id}` path segments of the item routes.
pub struct ItemPath {
    pub item_id: i32,
    pub room_id: i32,
}

impl<S> FromRequestParts<S> for ItemPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((item_id, room_id)): Path<(String, String)> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::NotFound {
                    resource: "item",
                    id: String::new(),
                })?;

        match (item_id.parse(), room_id.parse()) {
            (Ok(item_id), Ok(room_id)) => Ok(Self { item_id, room_id }),
            _ => Err(ApiError::NotFound {
                resource: "item",
                id: item_id,
            }),
        }
    }
}

/// Room list query, parsed and checked.
///
/// Keeps the raw parameters so list responses can echo them back.
pub struct RoomFilters {
    pub params: RoomFilterParams,
    pub filter: RoomFilter,
}

impl<S> FromRequestParts<S> for RoomFilters
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<RoomFilterParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "query",
                    reason: "malformed query string",
                })
            })?;

        let filter = params.parse()?;
        Ok(Self { params, filter })
    }
}
