//! Core types and pure logic for the docstash project.
//!
//! This crate holds everything that does not touch the network:
//!
//! - [`codec`] - the flatten/unflatten codec that maps nested values
//!   onto flat dotted-path cache entries, plus legacy string coercion
//! - [`cache`] - the cache transport trait, its error type, and the
//!   shared reachability signal
//! - [`storage`] - the durable document store trait and document types
//!
//! Concrete backends (in-memory, Redis) and the record container that
//! orchestrates them live in the `docstash` crate.

pub mod cache;
pub mod codec;
pub mod storage;
