//! Item endpoints
//!
//! Edit and delete carry the owning room id in the path so the client can be
//! sent back to that room afterwards.

use axum::{
    extract::Query,
    response::Redirect,
    routing::get,
    Form, Json, Router,
};
use serde::Serialize;

use super::rooms::room_path;
use crate::db::repos::{Item, ItemListing, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Db, ItemPath};
use crate::models::{ItemFilter, ItemForm};
use crate::state::AppState;

/// Item list with the filters that produced it
#[derive(Serialize)]
pub struct ItemListResponse {
    pub items: Vec<ItemListing>,
    pub filters: ItemFilter,
}

/// Current values for the item edit form
#[derive(Serialize)]
pub struct ItemEditResponse {
    pub item: Item,
    pub room_id: i32,
}

/// GET /items - every item with its room, optionally filtered
async fn list_items(
    Query(filter): Query<ItemFilter>,
    Db(pool): Db,
) -> Result<Json<ItemListResponse>, ApiError> {
    let items = ItemRepo::new(&pool).list(&filter).await?;
    Ok(Json(ItemListResponse {
        items,
        filters: filter,
    }))
}

/// GET /items/{item_id}/edit/{room_id}
async fn edit_item_form(
    ItemPath { item_id, room_id }: ItemPath,
    Db(pool): Db,
) -> Result<Json<ItemEditResponse>, ApiError> {
    let item = ItemRepo::new(&pool).get(item_id).await?;
    Ok(Json(ItemEditResponse { item, room_id }))
}

/// POST /items/{item_id}/edit/{room_id} - update an item
async fn edit_item(
    ItemPath { item_id, room_id }: ItemPath,
    Db(pool): Db,
    Form(form): Form<ItemForm>,
) -> Result<Redirect, ApiError> {
    let repo = ItemRepo::new(&pool);
    repo.get(item_id).await?;

    let item = form.validate()?;
    repo.update(item_id, &item).await?;
    Ok(Redirect::to(&room_path(room_id)))
}

/// GET|POST /items/{item_id}/delete/{room_id} - delete one item
async fn delete_item(
    ItemPath { item_id, room_id }: ItemPath,
    Db(pool): Db,
) -> Result<Redirect, ApiError> {
    if !ItemRepo::new(&pool).delete(item_id).await? {
        tracing::debug!(item_id, "Delete requested for missing item");
    }
    Ok(Redirect::to(&room_path(room_id)))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route(
            "/items/{item_id}/edit/{room_id}",
            get(edit_item_form).post(edit_item),
        )
        .route(
            "/items/{item_id}/delete/{room_id}",
            get(delete_item).post(delete_item),
        )
}
