//! Route handlers organized by resource

pub mod debug;
pub mod export;
pub mod health;
pub mod items;
pub mod rooms;
