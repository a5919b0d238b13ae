//! The record container: per-record façade over cache and store.

mod error;

pub use error::{ContainerError, Result};

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{OnceCell, RwLock};
use uuid::Uuid;

use docstash_core::cache::CacheTransport;
use docstash_core::codec::{coerce, flatten, is_truthy, join_path, unflatten, STORAGE_ROOT};
use docstash_core::storage::StoreProvider;

use crate::gateway::{CacheGateway, StoreGateway};

/// Write-through, read-through cache for one logical record.
///
/// Reads check the cache first and fall through to the durable store,
/// writing the result back; writes go to both stores, with the cache
/// subtree deleted first so a smaller value never leaves stale nested
/// fields behind. When the store provider yields nothing the container
/// degrades to a plain in-memory map for its lifetime; when the cache
/// transport is unreachable every operation runs store-only.
///
/// There is no per-key locking: concurrent operations on the same key
/// interleave last-write-wins, with no isolation guarantee.
///
/// # Compatibility quirk
///
/// A cached value only counts as a hit when it is truthy - `0`,
/// `false`, `""`, and the empty object fall through to the durable
/// store even when the cache holds them. The net result is still
/// correct (the store has the same value), but those reads never save
/// a store round-trip. Preserved for compatibility with data written
/// by the original system; do not imitate.
pub struct RecordContainer {
    cache: CacheGateway,
    store: StoreGateway,
    /// Assigned once on first use, never re-derived - even if the
    /// durable document is later recreated.
    cache_id: OnceCell<String>,
    /// Prepended to derived cache identifiers; empty by default.
    namespace_prefix: String,
    /// Used only while the provider yields no store; invisible to the
    /// cache layer.
    fallback: RwLock<HashMap<String, Value>>,
}

impl RecordContainer {
    /// Creates a container for the record addressed by `selector`.
    pub fn new(
        selector: Value,
        provider: Arc<dyn StoreProvider>,
        transport: Arc<dyn CacheTransport>,
    ) -> Self {
        Self {
            cache: CacheGateway::new(transport),
            store: StoreGateway::new(provider, selector),
            cache_id: OnceCell::new(),
            namespace_prefix: String::new(),
            fallback: RwLock::new(HashMap::new()),
        }
    }

    /// Prepends a prefix to the derived cache identifier, for
    /// deployments sharing one cache cluster (see
    /// [`Config::cache_namespace_prefix`](crate::Config)).
    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    /// Returns the cache identifier, assigning it on first use.
    ///
    /// Derived from the durable document's identity when one exists,
    /// otherwise a fresh unique token. Single-flight: concurrent first
    /// calls resolve to the same identifier.
    async fn ensure_cache_id(&self) -> Result<&str> {
        let id = self
            .cache_id
            .get_or_try_init(|| async {
                let prefix = self.namespace_prefix.as_str();
                let id = match self.store.open().await? {
                    Some(handle) => join_path([prefix, STORAGE_ROOT, handle.id()]),
                    None => {
                        let token = Uuid::new_v4().to_string();
                        join_path([prefix, STORAGE_ROOT, token.as_str()])
                    }
                };
                tracing::debug!(cache_id = %id, "Assigned cache identifier");
                Ok::<_, ContainerError>(id)
            })
            .await?;
        Ok(id.as_str())
    }

    /// Reads the value stored at a dotted key path.
    ///
    /// Cache first; a falsy unflattened result counts as a miss (see
    /// the type-level quirk note) and falls through to the durable
    /// store or, absent one, the fallback map. A defined durable value
    /// is written back into the cache before returning.
    pub async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        let cache_id = self.ensure_cache_id().await?;

        let mut fields = self.cache.list_fields(cache_id, Some(key)).await;
        if fields.is_empty() {
            fields.push(key.to_string());
        }
        let raw = self.cache.get_many(cache_id, &fields).await;
        let entries: BTreeMap<String, Value> = raw
            .into_iter()
            .map(|(path, value)| (path, coerce(&value)))
            .collect();
        let cached = unflatten(&entries, key);
        if is_truthy(&cached) {
            tracing::trace!(%key, "Cache hit");
            return Ok(Some(cached));
        }
        tracing::trace!(%key, "Cache miss");

        let value = match self.store.open().await? {
            Some(handle) => handle.field(key),
            None => self.fallback.read().await.get(key).cloned(),
        };

        if let Some(ref value) = value {
            self.cache.write(cache_id, flatten(key, value)).await?;
        }

        Ok(value)
    }

    /// Writes a value at a dotted key path.
    ///
    /// The cache subtree under `key` is deleted first and awaited, so
    /// stale nested fields from a previous larger value cannot
    /// survive. The flattened cache write and the durable field write
    /// then run concurrently; either side failing surfaces to the
    /// caller.
    pub async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        let cache_id = self.ensure_cache_id().await?;

        self.cache.delete_tree(cache_id, &[key]).await?;

        let cache_side = async {
            self.cache
                .write(cache_id, flatten(key, &value))
                .await
                .map_err(ContainerError::from)
        };
        let store_side = async {
            match self.store.open().await? {
                Some(mut handle) => handle.set_field(key, value.clone()).await?,
                None => {
                    self.fallback
                        .write()
                        .await
                        .insert(key.to_string(), value.clone());
                }
            }
            Ok::<_, ContainerError>(())
        };
        tokio::try_join!(cache_side, store_side)?;

        tracing::trace!(%key, "Record field set");
        Ok(())
    }

    /// Removes the value at a dotted key path from both stores.
    pub async fn delete_item(&self, key: &str) -> Result<()> {
        let cache_id = self.ensure_cache_id().await?;

        let cache_side = async {
            self.cache
                .delete_tree(cache_id, &[key])
                .await
                .map_err(ContainerError::from)
        };
        let store_side = async {
            match self.store.open().await? {
                Some(mut handle) => handle.set_field(key, Value::Null).await?,
                None => {
                    self.fallback.write().await.remove(key);
                }
            }
            Ok::<_, ContainerError>(())
        };
        tokio::try_join!(cache_side, store_side)?;

        tracing::trace!(%key, "Record field deleted");
        Ok(())
    }
}
