use thiserror::Error;

/// Error taxonomy for paginated query execution.
///
/// Every failure surfaces to the immediate caller; no variant is ever
/// swallowed and no partial Page/Slice is returned alongside an error.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Malformed request parameters (e.g. a zero page size). Raised at
    /// construction time, before anything reaches the storage layer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A sort key that is not part of the target schema's allowed field
    /// set. There is no silent fallback to unsorted results.
    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    /// A failure reported by the underlying content or count executor
    /// (connectivity, timeout, query syntax). Propagated unchanged; this
    /// layer adds no retry logic.
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The caller abandoned the operation before it completed.
    #[error("Operation cancelled")]
    Cancelled,
}

impl QueryError {
    /// Wrap an arbitrary storage-layer failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        QueryError::Storage(Box::new(err))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for QueryError {
    fn from(err: sqlx::Error) -> Self {
        QueryError::Storage(Box::new(err))
    }
}

pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QueryError::InvalidArgument("page size must be at least 1".to_string());
        assert_eq!(err.to_string(), "Invalid argument: page size must be at least 1");

        let err = QueryError::InvalidSortField("nonexistentColumn".to_string());
        assert_eq!(err.to_string(), "Unknown sort field: nonexistentColumn");

        assert_eq!(QueryError::Cancelled.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_storage_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out");
        let err = QueryError::storage(io);
        assert!(matches!(err, QueryError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: connection timed out");
    }
}
