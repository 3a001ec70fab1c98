//! Connection wiring for the key-value cache service.
//!
//! Provides a [`CacheClient`] trait with two implementations:
//! - [`RedisCache`] - Live Redis connection handle
//! - [`NullCache`] - No-op client when caching is disabled

mod null_cache;
mod redis_cache;
mod service;

use std::sync::Arc;

use crate::config::Config;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheClient, CacheError, CacheResult};

/// Builds the cache client selected by `config`.
///
/// # Errors
///
/// Returns [`CacheError::Connection`] if caching is enabled and Redis cannot
/// be reached.
pub async fn connect(config: &Config) -> CacheResult<Arc<dyn CacheClient>> {
    if !config.cache_enabled {
        tracing::info!("Cache disabled (NullCache)");
        return Ok(Arc::new(NullCache::new()));
    }

    let redis = RedisCache::connect(&config.redis_url).await?;
    Ok(Arc::new(redis))
}
