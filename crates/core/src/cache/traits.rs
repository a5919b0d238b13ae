use async_trait::async_trait;

use super::{Reachability, Result};

/// Raw keyed-hash-map primitives over the cache transport.
///
/// One namespace holds all field paths of one record container; the
/// namespace string is the container's cache identifier. Implementors
/// are plain adapters - the reachability short-circuit, delete-marker
/// handling, and batching decisions live in the gateway.
#[async_trait]
pub trait CacheTransport: Send + Sync {
    /// Lists every field path stored under a namespace.
    async fn fields(&self, namespace: &str) -> Result<Vec<String>>;

    /// Gets raw string values for the given field paths, in order.
    /// Absent fields come back as `None`.
    async fn get_many(&self, namespace: &str, fields: &[String]) -> Result<Vec<Option<String>>>;

    /// Writes the given field/value pairs in one batched call.
    async fn set_many(&self, namespace: &str, entries: &[(String, String)]) -> Result<()>;

    /// Deletes the given field paths in one batched call.
    async fn delete_many(&self, namespace: &str, fields: &[String]) -> Result<()>;

    /// Handle to this transport's shared reachability signal.
    fn reachability(&self) -> &Reachability;
}
