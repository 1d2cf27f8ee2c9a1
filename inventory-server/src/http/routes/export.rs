//! Spreadsheet download endpoints
//!
//! Both accept the same query parameters as the matching list endpoint.

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::db::repos::{ItemRepo, RoomRepo};
use crate::export::{self, SheetLayout, ITEMS_LAYOUT, ROOMS_LAYOUT, XLSX_CONTENT_TYPE};
use crate::http::error::ApiError;
use crate::http::extractors::{Db, RoomFilters};
use crate::models::ItemFilter;
use crate::state::AppState;

fn attachment(layout: &SheetLayout, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", layout.file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// GET /rooms/export
async fn export_rooms(
    RoomFilters { filter, .. }: RoomFilters,
    Db(pool): Db,
) -> Result<Response, ApiError> {
    let rooms = RoomRepo::new(&pool).list(&filter).await?;
    let bytes = export::rooms_workbook(&rooms)?;

    tracing::info!(rows = rooms.len(), "Exported rooms");
    Ok(attachment(&ROOMS_LAYOUT, bytes))
}

/// GET /items/export
async fn export_items(
    Query(filter): Query<ItemFilter>,
    Db(pool): Db,
) -> Result<Response, ApiError> {
    let items = ItemRepo::new(&pool).list(&filter).await?;
    let bytes = export::items_workbook(&items)?;

    tracing::info!(rows = items.len(), "Exported items");
    Ok(attachment(&ITEMS_LAYOUT, bytes))
}

/// Export routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms/export", get(export_rooms))
        .route("/items/export", get(export_items))
}
