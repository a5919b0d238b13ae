//! docstash - a write-through, read-through record cache.
//!
//! A [`RecordContainer`] is a per-record façade over two stores: a
//! fast field-value cache (Redis, or in-memory) and a durable document
//! store. Consumers read and write dotted key paths of one logical
//! document without knowing which store currently holds the data - or
//! that, during an outage, only the durable store is being used.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use docstash::{MemoryDocumentStore, MemoryTransport, RecordContainer};
//! use serde_json::json;
//!
//! # async fn demo() -> docstash::container::Result<()> {
//! let store = MemoryDocumentStore::new();
//! let transport = Arc::new(MemoryTransport::new());
//! let container = RecordContainer::new(
//!     json!({"boardId": "b1"}),
//!     Arc::new(store.clone()),
//!     transport,
//! );
//!
//! container.set_item("prefs", json!({"theme": "dark"})).await?;
//! let theme = container.get_item("prefs.theme").await?;
//! assert_eq!(theme, Some(json!("dark")));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod container;
pub mod gateway;
pub mod store;
pub mod transport;

pub use config::Config;
pub use container::{ContainerError, RecordContainer};
pub use gateway::{CacheGateway, DocumentHandle, StoreGateway};
pub use store::MemoryDocumentStore;
pub use transport::MemoryTransport;

#[cfg(feature = "redis")]
pub use transport::RedisTransport;
