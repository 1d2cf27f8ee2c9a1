//! Room endpoints

use axum::{
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Item, ItemRepo, Room, RoomRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Db, RoomFilters, RoomId};
use crate::models::{ItemForm, RoomFilterParams, RoomForm};
use crate::state::AppState;

/// Room list with the filters that produced it
#[derive(Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<Room>,
    pub filters: RoomFilterParams,
}

/// A room and everything in it
#[derive(Serialize)]
pub struct RoomDetailResponse {
    pub room: Room,
    pub items: Vec<Item>,
}

pub(crate) fn room_path(room_id: i32) -> String {
    format!("/rooms/{room_id}")
}

/// GET /rooms - list rooms, optionally filtered
async fn list_rooms(
    RoomFilters { params, filter }: RoomFilters,
    Db(pool): Db,
) -> Result<Json<RoomListResponse>, ApiError> {
    let rooms = RoomRepo::new(&pool).list(&filter).await?;

    Ok(Json(RoomListResponse {
        rooms,
        filters: params,
    }))
}

/// POST /rooms/add - create a room
async fn add_room(Db(pool): Db, Form(form): Form<RoomForm>) -> Result<Redirect, ApiError> {
    let room = form.validate()?;
    RoomRepo::new(&pool).create(&room).await?;
    Ok(Redirect::to("/rooms"))
}

/// GET /rooms/{room_id} - room with its items
async fn room_detail(
    RoomId(room_id): RoomId,
    Db(pool): Db,
) -> Result<Json<RoomDetailResponse>, ApiError> {
    let room = RoomRepo::new(&pool).get(room_id).await?;
    let items = ItemRepo::new(&pool).list_for_room(room_id).await?;
    Ok(Json(RoomDetailResponse { room, items }))
}

/// GET /rooms/{room_id}/edit - current values for the edit form
async fn edit_room_form(
    RoomId(room_id): RoomId,
    Db(pool): Db,
) -> Result<Json<Room>, ApiError> {
    let room = RoomRepo::new(&pool).get(room_id).await?;
    Ok(Json(room))
}

/// POST /rooms/{room_id}/edit - update a room
async fn edit_room(
    RoomId(room_id): RoomId,
    Db(pool): Db,
    Form(form): Form<RoomForm>,
) -> Result<Redirect, ApiError> {
    let repo = RoomRepo::new(&pool);
    repo.get(room_id).await?;

    let room = form.validate()?;
    repo.update(room_id, &room).await?;
    Ok(Redirect::to("/rooms"))
}

/// GET|POST /rooms/{room_id}/delete - delete a room and its items
async fn delete_room(RoomId(room_id): RoomId, Db(pool): Db) -> Result<Redirect, ApiError> {
    if !RoomRepo::new(&pool).delete(room_id).await? {
        tracing::debug!(room_id, "Delete requested for missing room");
    }
    Ok(Redirect::to("/rooms"))
}

/// POST /rooms/{room_id}/add_item - add an item to a room
async fn add_item(
    RoomId(room_id): RoomId,
    Db(pool): Db,
    Form(form): Form<ItemForm>,
) -> Result<Redirect, ApiError> {
    let item = form.validate()?;
    ItemRepo::new(&pool).create(room_id, &item).await?;
    Ok(Redirect::to(&room_path(room_id)))
}

/// Room routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/add", post(add_room))
        .route("/rooms/{room_id}", get(room_detail))
        .route("/rooms/{room_id}/edit", get(edit_room_form).post(edit_room))
        .route("/rooms/{room_id}/delete", get(delete_room).post(delete_room))
        .route("/rooms/{room_id}/add_item", post(add_item))
}
