//! Database layer - connection provider, schema, query builder, repositories
//!
//! # Design Principles
//!
//! - One shared pool per process, owned by [`Database`] and injected into handlers
//! - Filter values are always bind parameters, never query text
//! - Transactions for multi-step operations

pub mod error;
pub mod filters;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use filters::{BindValue, FilterSet};
pub use pool::{connect_with_retry, Database};
pub use repos::*;
