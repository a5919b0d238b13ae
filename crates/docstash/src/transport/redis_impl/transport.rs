//! Redis cache transport implementation.

use async_trait::async_trait;
use redis::AsyncCommands;

use docstash_core::cache::{CacheTransport, Reachability, Result};

use super::error::map_redis_error;

/// Redis cache transport using connection manager for pooling.
///
/// Each container namespace is one Redis hash. The connection manager
/// reconnects internally and exposes no connection events, so the
/// reachability signal is driven from per-command outcomes instead: a
/// connection-shaped error marks it down, the next success marks it up.
/// Logging happens only on transitions - one event per outage.
pub struct RedisTransport {
    conn: redis::aio::ConnectionManager,
    reachability: Reachability,
}

impl RedisTransport {
    /// Creates a new Redis transport.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot
    /// be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self {
            conn,
            reachability: Reachability::new(),
        })
    }

    /// Updates the reachability signal from a command outcome.
    fn observe<T>(&self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => {
                if self.reachability.mark_up() {
                    tracing::info!("Cache transport reachable again");
                }
            }
            Err(err) if err.is_connection() => {
                if self.reachability.mark_down() {
                    tracing::warn!(error = %err, "Cache transport unreachable");
                }
            }
            Err(_) => {}
        }
        result
    }
}

#[async_trait]
impl CacheTransport for RedisTransport {
    async fn fields(&self, namespace: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let result = conn.hkeys(namespace).await.map_err(map_redis_error);
        self.observe(result)
    }

    async fn get_many(&self, namespace: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.clone();
        let result = conn.hget(namespace, fields).await.map_err(map_redis_error);
        self.observe(result)
    }

    async fn set_many(&self, namespace: &str, entries: &[(String, String)]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let result = conn
            .hset_multiple::<_, _, _, ()>(namespace, entries)
            .await
            .map_err(map_redis_error);
        self.observe(result)
    }

    async fn delete_many(&self, namespace: &str, fields: &[String]) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let result = conn
            .hdel::<_, _, ()>(namespace, fields)
            .await
            .map_err(map_redis_error);
        self.observe(result)
    }

    fn reachability(&self) -> &Reachability {
        &self.reachability
    }
}
