//! Cache client trait and error types.

use async_trait::async_trait;

/// Errors that can occur while talking to the cache service.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Handle to the key-value cache service.
///
/// Classification never goes through this trait; it exists so the
/// surrounding application can hold either a live connection or a no-op
/// stand-in behind one type.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis connection handle
/// - [`crate::infrastructure::cache::NullCache`] - No-op client for disabled caching
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Checks whether the cache backend answers.
    async fn health_check(&self) -> bool;

    /// Human-readable address of the backend, safe to log.
    fn describe(&self) -> String;
}
