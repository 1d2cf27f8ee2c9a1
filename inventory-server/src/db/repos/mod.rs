//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and owns all SQL for one table.

pub mod items;
pub mod rooms;

pub use items::{Item, ItemListing, ItemRepo};
pub use rooms::{Room, RoomRepo};
