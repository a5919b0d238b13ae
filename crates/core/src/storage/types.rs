use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A durable document as the store hands it out.
///
/// `body` is the full document object; the cached sub-tree lives under
/// its `storage` field (see [`codec::STORAGE_ROOT`](crate::codec::STORAGE_ROOT)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
}

impl StoredDocument {
    /// Creates a document with the given id and body.
    pub fn new(id: impl Into<String>, body: Value) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }
}
