//! Gateways between the record container and its two stores.
//!
//! [`CacheGateway`] layers the reachability short-circuit, degraded
//! reads, delete-marker handling, and recursive prefix deletion on top
//! of the raw cache transport. [`StoreGateway`] resolves the durable
//! document by selector (creating it when missing) and hands out a
//! [`DocumentHandle`] for field access under the `storage` root.
//! The gateways never call each other; the container coordinates.

mod cache;
mod store;

pub use cache::CacheGateway;
pub use store::{DocumentHandle, StoreGateway};
