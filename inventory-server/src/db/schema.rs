//! Schema initialization for the inventory tables

use sqlx::PgPool;

use super::DbError;

/// Create the `rooms` and `items` tables if they do not exist yet.
pub async fn init(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Creating tables...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            number TEXT NOT NULL,
            floor TEXT NOT NULL,
            teacher TEXT NOT NULL,
            capacity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id SERIAL PRIMARY KEY,
            room_id INTEGER REFERENCES rooms(id),
            name TEXT NOT NULL,
            inventory_number TEXT NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_room ON items(room_id)")
        .execute(pool)
        .await?;

    tracing::info!("Database initialized");
    Ok(())
}
