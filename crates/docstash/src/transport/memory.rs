//! In-memory cache transport.
//!
//! A map of namespace to field/value hash behind a tokio `RwLock`,
//! mirroring the Redis transport's hash semantics so the two are
//! interchangeable. The reachability handle can be flipped from the
//! outside to simulate an outage, which the tests rely on.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use docstash_core::cache::{CacheTransport, Reachability, Result};

/// In-memory cache transport.
///
/// Thread-safe via `Arc<RwLock<_>>`; clones share the same data and
/// the same reachability signal. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    maps: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
    reachability: Reachability,
}

impl MemoryTransport {
    /// Creates a new empty transport in the reachable state.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheTransport for MemoryTransport {
    async fn fields(&self, namespace: &str) -> Result<Vec<String>> {
        let maps = self.maps.read().await;
        Ok(maps
            .get(namespace)
            .map(|hash| hash.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_many(&self, namespace: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        let maps = self.maps.read().await;
        let hash = maps.get(namespace);
        Ok(fields
            .iter()
            .map(|field| hash.and_then(|h| h.get(field).cloned()))
            .collect())
    }

    async fn set_many(&self, namespace: &str, entries: &[(String, String)]) -> Result<()> {
        let mut maps = self.maps.write().await;
        let hash = maps.entry(namespace.to_string()).or_default();
        for (field, value) in entries {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn delete_many(&self, namespace: &str, fields: &[String]) -> Result<()> {
        let mut maps = self.maps.write().await;
        if let Some(hash) = maps.get_mut(namespace) {
            for field in fields {
                hash.remove(field);
            }
            if hash.is_empty() {
                maps.remove(namespace);
            }
        }
        Ok(())
    }

    fn reachability(&self) -> &Reachability {
        &self.reachability
    }
}
