//! Cache gateway: transport adapter scoped to one cache identifier.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use docstash_core::cache::{CacheTransport, Result};
use docstash_core::codec::FieldWrite;

/// Thin adapter over the cache transport.
///
/// Every operation short-circuits to a no-op (empty result, nothing
/// written) while the reachability signal says the transport is down.
/// Read failures additionally degrade to a miss instead of an error;
/// write and delete failures propagate as `CacheError`.
#[derive(Clone)]
pub struct CacheGateway {
    transport: Arc<dyn CacheTransport>,
}

impl CacheGateway {
    /// Creates a gateway over the given transport.
    pub fn new(transport: Arc<dyn CacheTransport>) -> Self {
        Self { transport }
    }

    fn is_down(&self) -> bool {
        self.transport.reachability().is_down()
    }

    /// Lists field paths under a cache identifier, optionally filtered
    /// to those starting with `prefix`.
    ///
    /// Returns an empty listing while the cache is down or when the
    /// listing itself fails.
    pub async fn list_fields(&self, cache_id: &str, prefix: Option<&str>) -> Vec<String> {
        if self.is_down() {
            return Vec::new();
        }
        let fields = match self.transport.fields(cache_id).await {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(%cache_id, error = %err, "Cache listing failed, treating as empty");
                return Vec::new();
            }
        };
        match prefix {
            Some(prefix) => fields
                .into_iter()
                .filter(|field| field.starts_with(prefix))
                .collect(),
            None => fields,
        }
    }

    /// Gets raw string values for the given field paths.
    ///
    /// Absent fields are omitted from the result. A transport failure
    /// degrades to an empty result (a miss), never an error.
    pub async fn get_many(&self, cache_id: &str, fields: &[String]) -> HashMap<String, String> {
        if self.is_down() || fields.is_empty() {
            return HashMap::new();
        }
        match self.transport.get_many(cache_id, fields).await {
            Ok(values) => fields
                .iter()
                .cloned()
                .zip(values)
                .filter_map(|(field, value)| value.map(|v| (field, v)))
                .collect(),
            Err(err) => {
                tracing::warn!(%cache_id, error = %err, "Cache read failed, treating as miss");
                HashMap::new()
            }
        }
    }

    /// Applies a batch of flattened writes.
    ///
    /// Entries carrying a delete marker are deleted; the rest are
    /// written in one batched call. No-op while the cache is down.
    pub async fn write(&self, cache_id: &str, entries: BTreeMap<String, FieldWrite>) -> Result<()> {
        if self.is_down() || entries.is_empty() {
            return Ok(());
        }

        let mut sets = Vec::new();
        let mut deletes = Vec::new();
        for (field, write) in entries {
            match write {
                FieldWrite::Set(value) => sets.push((field, value)),
                FieldWrite::Delete => deletes.push(field),
            }
        }

        if !deletes.is_empty() {
            self.transport.delete_many(cache_id, &deletes).await?;
        }
        if !sets.is_empty() {
            self.transport.set_many(cache_id, &sets).await?;
        }
        Ok(())
    }

    /// Deletes every field under each of the given key prefixes.
    ///
    /// Lists the fields matching each prefix (a prefix with no deeper
    /// structure matches itself), unions them, and issues one batched
    /// delete - so deleting a parent key removes every descendant
    /// field flattening may have created for it.
    pub async fn delete_tree(&self, cache_id: &str, prefixes: &[&str]) -> Result<()> {
        if self.is_down() {
            return Ok(());
        }

        let mut doomed = HashSet::new();
        for prefix in prefixes {
            doomed.extend(self.list_fields(cache_id, Some(prefix)).await);
        }
        if doomed.is_empty() {
            return Ok(());
        }

        let fields: Vec<String> = doomed.into_iter().collect();
        self.transport.delete_many(cache_id, &fields).await
    }
}
