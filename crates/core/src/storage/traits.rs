use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Result, StoredDocument};

/// Durable document store, addressed by opaque selector criteria.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Finds the first document matching the selector.
    async fn find_one(&self, selector: &Value) -> Result<Option<StoredDocument>>;

    /// Inserts a new document.
    async fn insert(&self, doc: &StoredDocument) -> Result<()>;

    /// Persists the current state of an existing document.
    async fn update(&self, doc: &StoredDocument) -> Result<()>;
}

/// Zero-argument capability yielding a document store, or nothing.
///
/// A container whose provider yields `None` runs in degraded mode
/// against its in-memory fallback map for its whole lifetime. The
/// provider is consulted on every operation, matching the source
/// behavior of resolving the collection lazily.
pub trait StoreProvider: Send + Sync {
    fn provide(&self) -> Option<Arc<dyn DocumentStore>>;
}

impl<F> StoreProvider for F
where
    F: Fn() -> Option<Arc<dyn DocumentStore>> + Send + Sync,
{
    fn provide(&self) -> Option<Arc<dyn DocumentStore>> {
        self()
    }
}

impl StoreProvider for Option<Arc<dyn DocumentStore>> {
    fn provide(&self) -> Option<Arc<dyn DocumentStore>> {
        self.clone()
    }
}
