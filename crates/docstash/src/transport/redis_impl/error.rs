//! Redis error mapping to CacheError.
//!
//! The mapping decides more than display text: `ConnectionFailed` is
//! the variant that flips the reachability signal, so every error
//! shape meaning "the server is not there" must land on it. Command
//! failures against a live server stay `OperationFailed` and leave the
//! signal alone.

use docstash_core::cache::CacheError;

/// Maps Redis errors to CacheError.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if is_connection_shaped(&err) {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

/// True for errors that indicate the server is unreachable rather
/// than a bad command: refusals, timeouts, dropped links, raw I/O
/// faults, and cluster-unavailability replies.
fn is_connection_shaped(err: &redis::RedisError) -> bool {
    err.is_connection_refusal()
        || err.is_timeout()
        || err.is_connection_dropped()
        || err.is_io_error()
        || matches!(
            err.kind(),
            redis::ErrorKind::ClusterDown | redis::ErrorKind::MasterDown
        )
}
