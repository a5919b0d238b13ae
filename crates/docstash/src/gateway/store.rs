//! Store gateway: durable document resolution and field access.

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use docstash_core::codec::{clear_path, get_path, join_path, set_path, STORAGE_ROOT};
use docstash_core::storage::{DocumentStore, Result, StoreProvider, StoredDocument};

/// Resolves a container's durable document by selector.
///
/// The provider is consulted on every call: when it yields no store
/// the gateway reports degraded mode (`None`) and the container falls
/// back to its in-memory map.
pub struct StoreGateway {
    provider: Arc<dyn StoreProvider>,
    selector: Value,
}

impl StoreGateway {
    /// Creates a gateway for one selector.
    pub fn new(provider: Arc<dyn StoreProvider>, selector: Value) -> Self {
        Self { provider, selector }
    }

    /// Finds or creates the document for this gateway's selector.
    ///
    /// Returns `None` when no store is configured. Otherwise the
    /// document is looked up by selector; a fresh one (uuid id, body
    /// seeded from the selector's object fields) is inserted when none
    /// matches, and a missing `storage` root is initialized to an
    /// empty object and persisted. Idempotent: repeated calls converge
    /// on the same document without duplicating writes.
    pub async fn open(&self) -> Result<Option<DocumentHandle>> {
        let Some(store) = self.provider.provide() else {
            return Ok(None);
        };

        let mut doc = match store.find_one(&self.selector).await? {
            Some(doc) => doc,
            None => {
                let body = match &self.selector {
                    Value::Object(fields) => Value::Object(fields.clone()),
                    _ => Value::Object(serde_json::Map::new()),
                };
                let doc = StoredDocument::new(Uuid::new_v4().to_string(), body);
                store.insert(&doc).await?;
                tracing::debug!(id = %doc.id, "Created durable document");
                doc
            }
        };

        if get_path(&doc.body, STORAGE_ROOT).map_or(true, |v| !v.is_object()) {
            set_path(
                &mut doc.body,
                STORAGE_ROOT,
                Value::Object(serde_json::Map::new()),
            );
            store.update(&doc).await?;
        }

        Ok(Some(DocumentHandle { store, doc }))
    }
}

/// A resolved durable document plus the store it came from.
pub struct DocumentHandle {
    store: Arc<dyn DocumentStore>,
    doc: StoredDocument,
}

impl DocumentHandle {
    /// The document's identity, used to derive the cache identifier.
    pub fn id(&self) -> &str {
        &self.doc.id
    }

    /// Reads the dotted path under the `storage` root.
    pub fn field(&self, path: &str) -> Option<Value> {
        get_path(&self.doc.body, &join_path([STORAGE_ROOT, path])).cloned()
    }

    /// Writes the dotted path under the `storage` root and persists.
    ///
    /// Writing `Null` clears the field instead - set-then-persist, not
    /// a distinct delete call.
    pub async fn set_field(&mut self, path: &str, value: Value) -> Result<()> {
        let full = join_path([STORAGE_ROOT, path]);
        match value {
            Value::Null => clear_path(&mut self.doc.body, &full),
            value => set_path(&mut self.doc.body, &full, value),
        }
        self.store.update(&self.doc).await
    }
}
