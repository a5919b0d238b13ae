//! Durable document store backends.
//!
//! The document-store transport proper (MongoDB or similar) is an
//! external collaborator; this module ships the in-memory backend used
//! for tests and single-process deployments.

mod inmemory;

pub use inmemory::MemoryDocumentStore;
