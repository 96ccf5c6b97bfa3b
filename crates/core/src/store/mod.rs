//! SQLite-backed snippet store.
//!
//! This module owns the durable record of snippets, with async access via
//! tokio-rusqlite. It provides:
//!
//! - Create, get-by-id, and list-latest operations
//! - Expiry filtering applied at read time against the current clock
//! - Automatic schema migrations
//! - WAL mode for concurrent access
//! - A purge operation for physically removing expired rows

pub mod connection;
pub mod migrations;
pub mod snippets;

pub use crate::Error;

pub use connection::SnippetDb;
pub use snippets::Snippet;
