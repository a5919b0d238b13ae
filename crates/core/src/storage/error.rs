use thiserror::Error;

/// Errors that can occur against the durable document store.
///
/// Unlike cache errors these are never masked: the container has no
/// fallback once a document provider exists, so store failures
/// propagate to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Persist failed: {0}")]
    PersistFailed(String),
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Store connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = StoreError::QueryFailed("bad selector".to_string());
        assert_eq!(error.to_string(), "Query failed: bad selector");
    }

    #[test]
    fn test_persist_failed_display() {
        let error = StoreError::PersistFailed("write concern".to_string());
        assert_eq!(error.to_string(), "Persist failed: write concern");
    }
}
