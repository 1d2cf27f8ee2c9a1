//! Item repository
//!
//! The global listing joins items to their rooms in one query, so items
//! without a room never show up there.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::{DbError, FilterSet};
use crate::models::{ItemFilter, NewItem};

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Item {
    pub id: i32,
    pub room_id: Option<i32>,
    pub name: String,
    pub inventory_number: String,
    pub status: String,
}

/// Item joined with its room, for the global list and export
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ItemListing {
    pub id: i32,
    pub name: String,
    pub inventory_number: String,
    pub status: String,
    pub room_name: String,
    pub room_number: String,
    pub room_id: i32,
}

const SELECT_LISTING: &str = r#"SELECT items.id, items.name, items.inventory_number, items.status,
       rooms.name AS room_name, rooms.number AS room_number, rooms.id AS room_id
FROM items
JOIN rooms ON items.room_id = rooms.id"#;

const LISTING_ORDER: &str = "rooms.number, items.id";

fn item_filters(filter: &ItemFilter) -> FilterSet {
    FilterSet::new()
        .contains("items.name", &filter.name)
        .contains("items.inventory_number", &filter.inventory_number)
        .equals("items.status", &filter.status)
        .contains("rooms.name", &filter.room_name)
        .contains("rooms.number", &filter.room_number)
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List items with their rooms, ordered by room number.
    pub async fn list(&self, filter: &ItemFilter) -> Result<Vec<ItemListing>, DbError> {
        let mut query = item_filters(filter).build(SELECT_LISTING, LISTING_ORDER);
        let items = query
            .build_query_as::<ItemListing>()
            .fetch_all(self.pool)
            .await?;
        Ok(items)
    }

    /// Items assigned to one room.
    pub async fn list_for_room(&self, room_id: i32) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, room_id, name, inventory_number, status
            FROM items
            WHERE room_id = $1
            ORDER BY id
            "#,
        )
        .bind(room_id)
        .fetch_all(self.pool)
        .await?;
        Ok(items)
    }

    pub async fn get(&self, id: i32) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>(
            "SELECT id, room_id, name, inventory_number, status FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("item", id))
    }

    /// Add an item to `room_id`.
    ///
    /// A missing room is reported as not found rather than as a constraint failure.
    pub async fn create(&self, room_id: i32, item: &NewItem) -> Result<Item, DbError> {
        let created = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (room_id, name, inventory_number, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, room_id, name, inventory_number, status
            "#,
        )
        .bind(room_id)
        .bind(&item.name)
        .bind(&item.inventory_number)
        .bind(&item.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                DbError::not_found("room", room_id)
            }
            other => DbError::Sqlx(other),
        })?;

        tracing::info!(item_id = created.id, room_id, "Item created");
        Ok(created)
    }

    /// Update an item's fields. The room assignment is left alone.
    pub async fn update(&self, id: i32, item: &NewItem) -> Result<Item, DbError> {
        let updated = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $1, inventory_number = $2, status = $3
            WHERE id = $4
            RETURNING id, room_id, name, inventory_number, status
            "#,
        )
        .bind(&item.name)
        .bind(&item.inventory_number)
        .bind(&item.status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("item", id))?;

        tracing::info!(item_id = id, "Item updated");
        Ok(updated)
    }

    /// Returns whether an item was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let removed = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        tracing::info!(item_id = id, removed, "Item deleted");
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::rooms::tests::{sample_room, test_pool, unique};
    use crate::db::RoomRepo;

    fn sample_item(inventory_number: &str, status: &str) -> NewItem {
        NewItem {
            name: "Projector".into(),
            inventory_number: inventory_number.to_owned(),
            status: status.to_owned(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = test_pool().await;
        let room = RoomRepo::new(&pool)
            .create(&sample_room(&unique("items"), "110", 25))
            .await
            .unwrap();
        let repo = ItemRepo::new(&pool);
        let inv = unique("INV");

        let created = repo.create(room.id, &sample_item(&inv, "working")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.room_id, Some(room.id));
        assert_eq!(fetched.name, "Projector");
        assert_eq!(fetched.inventory_number, inv);
        assert_eq!(fetched.status, "working");

        let updated = repo
            .update(created.id, &sample_item(&inv, "broken"))
            .await
            .unwrap();
        assert_eq!(updated.status, "broken");
        assert_eq!(updated.room_id, Some(room.id));

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        RoomRepo::new(&pool).delete(room.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn item_for_missing_room_is_not_found() {
        let pool = test_pool().await;
        let err = ItemRepo::new(&pool)
            .create(-1, &sample_item(&unique("INV"), "working"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "room", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn listing_filters_by_status_and_room() {
        let pool = test_pool().await;
        let rooms = RoomRepo::new(&pool);
        let repo = ItemRepo::new(&pool);
        let tag = unique("listing");

        let room = rooms.create(&sample_room(&tag, "220", 25)).await.unwrap();
        let working = repo.create(room.id, &sample_item(&unique("INV"), "working")).await.unwrap();
        let broken = repo.create(room.id, &sample_item(&unique("INV"), "broken")).await.unwrap();

        let filter = ItemFilter {
            room_name: tag.clone(),
            status: "broken".into(),
            ..Default::default()
        };
        let found = repo.list(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, broken.id);
        assert_eq!(found[0].room_name, tag);
        assert_eq!(found[0].room_number, "220");
        assert_eq!(found[0].room_id, room.id);

        // Status is an exact match, not a substring
        let filter = ItemFilter {
            room_name: tag.clone(),
            status: "work".into(),
            ..Default::default()
        };
        assert!(repo.list(&filter).await.unwrap().is_empty());

        let filter = ItemFilter {
            room_name: tag.clone(),
            ..Default::default()
        };
        let ids: Vec<i32> = repo.list(&filter).await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![working.id, broken.id]);

        rooms.delete(room.id).await.unwrap();
    }
}
