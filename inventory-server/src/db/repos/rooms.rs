//! Room repository
//!
//! - list: dynamic filters, ordered by room number
//! - delete: removes the room's items first, inside one transaction

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::{DbError, FilterSet};
use crate::models::{NewRoom, RoomFilter};

/// Room record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub number: String,
    pub floor: String,
    pub teacher: String,
    pub capacity: i32,
}

const SELECT_ROOMS: &str = "SELECT id, name, number, floor, teacher, capacity FROM rooms";

const ROOM_ORDER: &str = "number, id";

fn room_filters(filter: &RoomFilter) -> FilterSet {
    FilterSet::new()
        .contains("name", &filter.name)
        .contains("number", &filter.number)
        .contains("floor", &filter.floor)
        .contains("teacher", &filter.teacher)
        .at_least("capacity", filter.capacity_min)
        .at_most("capacity", filter.capacity_max)
}

/// Room repository
pub struct RoomRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RoomRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List rooms matching `filter`, ordered by number.
    pub async fn list(&self, filter: &RoomFilter) -> Result<Vec<Room>, DbError> {
        let mut query = room_filters(filter).build(SELECT_ROOMS, ROOM_ORDER);
        let rooms = query.build_query_as::<Room>().fetch_all(self.pool).await?;
        Ok(rooms)
    }

    /// Get a single room by id.
    pub async fn get(&self, id: i32) -> Result<Room, DbError> {
        sqlx::query_as::<_, Room>(
            "SELECT id, name, number, floor, teacher, capacity FROM rooms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("room", id))
    }

    pub async fn create(&self, room: &NewRoom) -> Result<Room, DbError> {
        let created = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (name, number, floor, teacher, capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, number, floor, teacher, capacity
            "#,
        )
        .bind(&room.name)
        .bind(&room.number)
        .bind(&room.floor)
        .bind(&room.teacher)
        .bind(room.capacity)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(room_id = created.id, number = %created.number, "Room created");
        Ok(created)
    }

    pub async fn update(&self, id: i32, room: &NewRoom) -> Result<Room, DbError> {
        let updated = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET name = $1, number = $2, floor = $3, teacher = $4, capacity = $5
            WHERE id = $6
            RETURNING id, name, number, floor, teacher, capacity
            "#,
        )
        .bind(&room.name)
        .bind(&room.number)
        .bind(&room.floor)
        .bind(&room.teacher)
        .bind(room.capacity)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("room", id))?;

        tracing::info!(room_id = id, "Room updated");
        Ok(updated)
    }

    /// Delete a room and every item assigned to it.
    ///
    /// Returns whether a room was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let items = sqlx::query("DELETE FROM items WHERE room_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let rooms = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::info!(room_id = id, items_removed = items, "Room deleted");
        Ok(rooms > 0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::{Database, ItemRepo};
    use crate::models::NewItem;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p inventory-server -- --ignored

    pub(crate) async fn test_pool() -> PgPool {
        let db = Database::from_env().expect("DATABASE_URL required");
        db.acquire().await.expect("database unavailable")
    }

    /// Distinct per call, so concurrent tests don't see each other's rows.
    pub(crate) fn unique(prefix: &str) -> String {
        use std::sync::atomic::{AtomicU32, Ordering};
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        format!(
            "{prefix}-{}-{nanos}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        )
    }

    pub(crate) fn sample_room(name: &str, number: &str, capacity: i32) -> NewRoom {
        NewRoom {
            name: name.to_owned(),
            number: number.to_owned(),
            floor: "2".into(),
            teacher: "Ivanova".into(),
            capacity,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = RoomRepo::new(&pool);
        let name = unique("physics");

        let created = repo.create(&sample_room(&name, "204", 30)).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, name);
        assert_eq!(fetched.number, "204");
        assert_eq!(fetched.floor, "2");
        assert_eq!(fetched.teacher, "Ivanova");
        assert_eq!(fetched.capacity, 30);

        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_room_is_not_found() {
        let pool = test_pool().await;
        let err = RoomRepo::new(&pool).get(-1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "room", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_changes_every_field() {
        let pool = test_pool().await;
        let repo = RoomRepo::new(&pool);
        let room = repo.create(&sample_room(&unique("old"), "1", 10)).await.unwrap();

        let changes = NewRoom {
            name: unique("new"),
            number: "2".into(),
            floor: "3".into(),
            teacher: "Sidorov".into(),
            capacity: 12,
        };
        let updated = repo.update(room.id, &changes).await.unwrap();

        assert_eq!(updated.id, room.id);
        assert_eq!(updated.name, changes.name);
        assert_eq!(updated.teacher, "Sidorov");
        assert_eq!(updated.capacity, 12);

        assert!(matches!(
            repo.update(-1, &changes).await,
            Err(DbError::NotFound { .. })
        ));
        repo.delete(room.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn filters_return_only_matches() {
        let pool = test_pool().await;
        let repo = RoomRepo::new(&pool);
        let tag = unique("filter");

        let small = repo.create(&sample_room(&format!("{tag} small"), "B-1", 8)).await.unwrap();
        let large = repo.create(&sample_room(&format!("{tag} large"), "A-1", 40)).await.unwrap();

        // Case-insensitive partial match, ordered by number
        let filter = RoomFilter {
            name: tag.to_uppercase(),
            ..Default::default()
        };
        let found = repo.list(&filter).await.unwrap();
        let ids: Vec<i32> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![large.id, small.id]);

        let filter = RoomFilter {
            name: tag.clone(),
            capacity_min: Some(10),
            ..Default::default()
        };
        let found = repo.list(&filter).await.unwrap();
        assert_eq!(found, vec![large.clone()]);

        let filter = RoomFilter {
            name: tag.clone(),
            capacity_max: Some(10),
            ..Default::default()
        };
        assert_eq!(repo.list(&filter).await.unwrap(), vec![small.clone()]);

        repo.delete(small.id).await.unwrap();
        repo.delete(large.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unfiltered_list_returns_everything_by_number() {
        let pool = test_pool().await;
        let repo = RoomRepo::new(&pool);
        let tag = unique("all");

        let later = repo.create(&sample_room(&tag, "ZZ-9", 5)).await.unwrap();
        let earlier = repo.create(&sample_room(&tag, "AA-1", 5)).await.unwrap();

        let rooms = repo.list(&RoomFilter::default()).await.unwrap();
        let position = |id: i32| rooms.iter().position(|r| r.id == id).expect("room missing");
        assert!(position(earlier.id) < position(later.id));

        repo.delete(later.id).await.unwrap();
        repo.delete(earlier.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_cascades_to_items() {
        let pool = test_pool().await;
        let rooms = RoomRepo::new(&pool);
        let items = ItemRepo::new(&pool);

        let room = rooms.create(&sample_room(&unique("cascade"), "301", 20)).await.unwrap();
        let item = items
            .create(
                room.id,
                &NewItem {
                    name: "Microscope".into(),
                    inventory_number: unique("INV"),
                    status: "working".into(),
                },
            )
            .await
            .unwrap();

        assert!(rooms.delete(room.id).await.unwrap());
        assert!(items.list_for_room(room.id).await.unwrap().is_empty());
        assert!(matches!(items.get(item.id).await, Err(DbError::NotFound { .. })));

        // Second delete finds nothing
        assert!(!rooms.delete(room.id).await.unwrap());
    }
}
