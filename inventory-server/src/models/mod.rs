//! Request input models with validation at construction
//!
//! Form and query input is checked before it reaches the database.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod room;
pub mod validation;

pub use item::{ItemFilter, ItemForm, NewItem};
pub use room::{NewRoom, RoomFilter, RoomFilterParams, RoomForm};
pub use validation::ValidationError;
