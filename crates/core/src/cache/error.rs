use thiserror::Error;

/// Errors that can occur on the cache transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

impl CacheError {
    /// Returns true for connection-shaped failures, the ones that
    /// should flip the reachability signal.
    pub fn is_connection(&self) -> bool {
        matches!(self, CacheError::ConnectionFailed(_))
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
