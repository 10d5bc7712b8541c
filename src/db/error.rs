//! Catalog access error types

use sqlx::error::BoxDynError;
use thiserror::Error;

/// Errors raised while reading the function catalog.
///
/// Both variants are fatal to a run: the document is never partially written.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Database unreachable, authentication failure or unknown database
    #[error("Failed to connect to database '{database}': {source}")]
    Connection {
        database: String,
        #[source]
        source: BoxDynError,
    },

    /// Catalog query failed, e.g. malformed SQL or missing catalog objects
    #[error("Failed to query function catalog with pattern '{pattern}': {source}")]
    Query {
        pattern: String,
        #[source]
        source: BoxDynError,
    },
}

impl CatalogError {
    /// Wrap a connection-level failure
    pub fn connection(database: impl Into<String>, source: impl Into<BoxDynError>) -> Self {
        Self::Connection {
            database: database.into(),
            source: source.into(),
        }
    }

    /// Wrap a query-level failure
    pub fn query(pattern: impl Into<String>, source: impl Into<BoxDynError>) -> Self {
        Self::Query {
            pattern: pattern.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_message() {
        let err = CatalogError::connection(
            "h3_test",
            sqlx::Error::Protocol("connection refused".to_string()),
        );

        assert!(matches!(err, CatalogError::Connection { .. }));
        let msg = err.to_string();
        assert!(msg.contains("h3_test"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_query_error_message() {
        let err = CatalogError::query(
            "h3\\_%",
            sqlx::Error::Protocol("relation \"pg_proc\" does not exist".to_string()),
        );

        assert!(matches!(err, CatalogError::Query { .. }));
        assert!(err.to_string().contains("h3\\_%"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
