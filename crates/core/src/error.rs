//! Unified error types for snipbin.
//!
//! Callers distinguish exactly two kinds: [`Error::NotFound`] (expected,
//! maps to a 404) and everything else (a storage failure, maps to a 500).

use tokio_rusqlite::rusqlite;

/// Unified error type for the snippet store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No snippet with the requested id, or it has expired.
    ///
    /// Expired and missing rows are deliberately indistinguishable.
    #[error("snippet not found")]
    NotFound,

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// A stored timestamp could not be decoded.
    #[error("invalid timestamp in storage: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}

impl Error {
    /// True for the expected "absent or expired" case; everything else is a
    /// storage failure the caller should treat as opaque.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_expected_kind() {
        let err = Error::NotFound;
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "snippet not found");
    }

    #[test]
    fn test_database_is_storage_failure_kind() {
        let err = Error::Database(tokio_rusqlite::Error::ConnectionClosed);
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("database error"));
    }

    #[test]
    fn test_inner_error_unwrapped_from_call() {
        let err: Error = tokio_rusqlite::Error::Error(Error::NotFound).into();
        assert!(err.is_not_found());
    }
}
