//! Snippet operations: insert, get, latest, purge.
//!
//! Expiry is enforced at read time by comparing the stored `expires`
//! timestamp against the clock at query execution, so a row's visibility
//! can change between two calls without any write happening. Expired rows
//! stay on disk until `purge_expired` removes them.

use super::connection::SnippetDb;
use crate::Error;
use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;

/// Maximum number of snippets returned by [`SnippetDb::latest`].
const LATEST_LIMIT: u32 = 10;

/// A stored text snippet.
///
/// Timestamps are kept in UTC on disk and converted to the store's
/// configured display timezone when read back. Callers always receive an
/// owned copy, never a view into storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<FixedOffset>,
    pub expires: DateTime<FixedOffset>,
}

/// Encode a timestamp for storage.
///
/// Fixed-width RFC 3339 UTC ("...T12:34:56.789Z") so SQL string comparison
/// orders timestamps chronologically.
fn encode_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A row as it comes off disk, timestamps still undecoded.
struct RawSnippet {
    id: i64,
    title: String,
    content: String,
    created: String,
    expires: String,
}

impl RawSnippet {
    fn from_row(row: &rusqlite::Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created: row.get(3)?,
            expires: row.get(4)?,
        })
    }

    fn decode(self, tz: FixedOffset) -> Result<Snippet, Error> {
        Ok(Snippet {
            id: self.id,
            title: self.title,
            content: self.content,
            created: DateTime::parse_from_rfc3339(&self.created)?.with_timezone(&tz),
            expires: DateTime::parse_from_rfc3339(&self.expires)?.with_timezone(&tz),
        })
    }
}

const SNIPPET_COLUMNS: &str = "id, title, content, created, expires";

impl SnippetDb {
    /// Insert a new snippet expiring `expiry_days` days from now.
    ///
    /// Returns the assigned id. The store does no business validation here:
    /// an empty title or a zero day count is accepted as-is (a zero count
    /// simply produces a row that is already expired). Validating inputs is
    /// the caller's job. The write is not retried on failure.
    pub async fn insert(&self, title: &str, content: &str, expiry_days: u32) -> Result<i64, Error> {
        let title = title.to_string();
        let content = content.to_string();
        let created = Utc::now();
        let expires = created + Duration::days(i64::from(expiry_days));

        self.conn
            .call(move |conn| -> Result<i64, Error> {
                conn.execute(
                    "INSERT INTO snippets (title, content, created, expires)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![title, content, encode_ts(created), encode_ts(expires)],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(Error::from)
    }

    /// Get a snippet by id.
    ///
    /// Returns [`Error::NotFound`] when no row with that id exists or when
    /// the row has expired; the two cases are indistinguishable.
    pub async fn get(&self, id: i64) -> Result<Snippet, Error> {
        let tz = self.tz;
        let now = encode_ts(Utc::now());

        self.conn
            .call(move |conn| -> Result<Snippet, Error> {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {SNIPPET_COLUMNS} FROM snippets WHERE id = ?1 AND expires > ?2"
                ))?;

                match stmt.query_row(params![id, now], RawSnippet::from_row) {
                    Ok(raw) => raw.decode(tz),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::NotFound),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)
    }

    /// The ten most recently created non-expired snippets, newest first.
    ///
    /// "Newest" means highest id; the schema guarantees ids increase
    /// monotonically with insertion, so the two coincide. Returns an empty
    /// vec (not an error) when nothing is visible. A failure while reading
    /// rows discards everything read so far.
    pub async fn latest(&self) -> Result<Vec<Snippet>, Error> {
        let tz = self.tz;
        let now = encode_ts(Utc::now());

        self.conn
            .call(move |conn| -> Result<Vec<Snippet>, Error> {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {SNIPPET_COLUMNS} FROM snippets
                     WHERE expires > ?1 ORDER BY id DESC LIMIT {LATEST_LIMIT}"
                ))?;

                let rows = stmt.query_map(params![now], RawSnippet::from_row)?;

                let mut snippets = Vec::new();
                for row in rows {
                    snippets.push(row?.decode(tz)?);
                }
                Ok(snippets)
            })
            .await
            .map_err(Error::from)
    }

    /// Delete rows whose expiry has passed.
    ///
    /// Reads never see expired rows, so this only reclaims disk space.
    /// Returns the number of deleted rows.
    pub async fn purge_expired(&self) -> Result<u64, Error> {
        let now = encode_ts(Utc::now());

        self.conn
            .call(move |conn| -> Result<u64, Error> {
                let count = conn.execute("DELETE FROM snippets WHERE expires <= ?1", params![now])?;
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }
}
