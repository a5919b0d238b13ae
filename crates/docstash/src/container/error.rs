use thiserror::Error;

use docstash_core::cache::CacheError;
use docstash_core::storage::StoreError;

/// Errors surfaced by container operations.
///
/// Cache read failures never reach this type (they degrade to a miss
/// inside the gateway); cache write/delete failures and every store
/// failure propagate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;
