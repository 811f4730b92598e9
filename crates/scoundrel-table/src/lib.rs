//! Game tables for Scoundrel.
//!
//! The engine in `scoundrel-core` assumes its actions arrive one at a time,
//! in order, and that nobody asks it to draw a room mid-room. A table makes
//! that true: each one runs as an isolated Tokio task (actor model) owning a
//! single game, so every action sent to it is applied in the order received.
//!
//! # Key types
//!
//! - [`TableManager`]: creates/destroys tables, routes actions
//! - [`TableHandle`]: send commands to a running table actor
//! - [`TableStatus`]: lifecycle state machine
//! - [`TableConfig`]: table settings (history depth, draw gating, etc.)
//! - [`Dispatch`]: what became of a dispatched action

mod config;
mod error;
mod manager;
mod table;

pub use config::{TableConfig, TableStatus};
pub use error::TableError;
pub use manager::TableManager;
pub use table::{Dispatch, TableHandle, TableId, TableInfo};
