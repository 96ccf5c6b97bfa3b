//! Database connection management with pragma configuration.
//!
//! This module handles opening the SQLite database, applying required pragmas
//! for performance and concurrency (WAL mode), and running migrations.

use super::migrations;
use crate::Error;
use chrono::{FixedOffset, Offset, Utc};
use std::path::Path;
use tokio_rusqlite::Connection;

/// Snippet database handle.
///
/// Wraps a tokio-rusqlite Connection that runs database operations on a
/// background thread. Cloneable; clones share the same connection. The
/// handle is constructed once at startup and injected into callers, never
/// held as a process global.
#[derive(Clone, Debug)]
pub struct SnippetDb {
    pub(crate) conn: Connection,
    /// Timezone snippets are converted into when read back. Storage is
    /// always UTC; this only affects what callers see.
    pub(crate) tz: FixedOffset,
}

impl SnippetDb {
    /// Open a database at the specified path, reporting timestamps in UTC.
    ///
    /// Creates the file if it doesn't exist, applies performance pragmas,
    /// and runs any pending migrations.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::open_with_timezone(path, Utc.fix()).await
    }

    /// Open a database, converting timestamps to `tz` on read.
    pub async fn open_with_timezone(path: impl AsRef<Path>, tz: FixedOffset) -> Result<Self, Error> {
        let conn = Connection::open(path).await.map_err(|e| Error::Database(e.into()))?;

        Self::init(conn, tz).await
    }

    /// Open an in-memory database for testing.
    ///
    /// Creates a temporary in-memory SQLite database with the same
    /// pragma configuration as file-based databases.
    pub async fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| Error::Database(e.into()))?;

        Self::init(conn, Utc.fix()).await
    }

    async fn init(conn: Connection, tz: FixedOffset) -> Result<Self, Error> {
        conn.call(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode=WAL;
                 PRAGMA synchronous=NORMAL;
                 PRAGMA temp_store=MEMORY;
                 PRAGMA foreign_keys=ON;",
            )?;
            Ok(())
        })
        .await
        .map_err(Error::Database)?;

        migrations::run(&conn).await?;

        Ok(Self { conn, tz })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = SnippetDb::open_in_memory().await.unwrap();
        let version = db
            .conn
            .call(|conn| conn.query_row("SELECT sqlite_version()", [], |row| row.get::<_, String>(0)))
            .await
            .unwrap();
        assert!(!version.is_empty());
    }

    #[tokio::test]
    async fn test_in_memory_defaults_to_utc() {
        let db = SnippetDb::open_in_memory().await.unwrap();
        assert_eq!(db.tz.local_minus_utc(), 0);
    }
}
