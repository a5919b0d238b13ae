//! Cache transport backends.
//!
//! The in-memory transport is always available and backs the tests;
//! the Redis transport is enabled with the `redis` feature. Both
//! implement [`CacheTransport`](docstash_core::cache::CacheTransport),
//! so a container takes either behind an `Arc<dyn CacheTransport>`.

mod memory;

#[cfg(feature = "redis")]
mod redis_impl;

pub use memory::MemoryTransport;

#[cfg(feature = "redis")]
pub use redis_impl::RedisTransport;
