//! In-memory document store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use docstash_core::storage::{DocumentStore, Result, StoreError, StoreProvider, StoredDocument};

/// In-memory document store for testing.
///
/// Documents live in a `HashMap` wrapped in `Arc<RwLock<_>>` for
/// thread-safe access; clones share the same data. Selector matching
/// is top-level field equality: a document matches when every field of
/// the selector object equals the same field of its body.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    docs: Arc<RwLock<HashMap<String, StoredDocument>>>,
}

impl MemoryDocumentStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    fn matches(selector: &Value, body: &Value) -> bool {
        match (selector.as_object(), body.as_object()) {
            (Some(criteria), Some(fields)) => criteria
                .iter()
                .all(|(key, expected)| fields.get(key) == Some(expected)),
            _ => false,
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(&self, selector: &Value) -> Result<Option<StoredDocument>> {
        let docs = self.docs.read().await;
        Ok(docs
            .values()
            .find(|doc| Self::matches(selector, &doc.body))
            .cloned())
    }

    async fn insert(&self, doc: &StoredDocument) -> Result<()> {
        let mut docs = self.docs.write().await;
        if docs.contains_key(&doc.id) {
            return Err(StoreError::PersistFailed(format!(
                "duplicate document id: {}",
                doc.id
            )));
        }
        docs.insert(doc.id.clone(), doc.clone());
        Ok(())
    }

    async fn update(&self, doc: &StoredDocument) -> Result<()> {
        let mut docs = self.docs.write().await;
        if !docs.contains_key(&doc.id) {
            return Err(StoreError::PersistFailed(format!(
                "unknown document id: {}",
                doc.id
            )));
        }
        docs.insert(doc.id.clone(), doc.clone());
        Ok(())
    }
}

impl StoreProvider for MemoryDocumentStore {
    fn provide(&self) -> Option<Arc<dyn DocumentStore>> {
        Some(Arc::new(self.clone()))
    }
}
