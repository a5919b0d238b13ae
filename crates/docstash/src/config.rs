use std::env;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    pub redis_url: String,
    /// Prefix prepended to derived cache identifiers (default: empty).
    /// Set this when several deployments share one cache cluster.
    pub cache_namespace_prefix: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CACHE_NAMESPACE_PREFIX` - cache identifier prefix (default: empty)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            cache_namespace_prefix: env::var("CACHE_NAMESPACE_PREFIX").unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values() {
        let config = Config {
            redis_url: "redis://cache:6379".to_string(),
            cache_namespace_prefix: "staging".to_string(),
        };
        assert_eq!(config.redis_url, "redis://cache:6379");
        assert_eq!(config.cache_namespace_prefix, "staging");
    }
}
