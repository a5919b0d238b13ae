//! Redis cache transport.
//!
//! Maps a container's cache identifier to one Redis hash: HKEYS,
//! HMGET, HSET, and HDEL cover the four transport primitives. Also
//! drives the reachability signal from per-command outcomes.

mod error;
mod transport;

pub use transport::RedisTransport;
