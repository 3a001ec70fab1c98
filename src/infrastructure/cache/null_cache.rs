//! No-op cache client for disabled caching.

use super::service::CacheClient;
use async_trait::async_trait;
use tracing::debug;

/// A cache client that is not connected to anything.
///
/// Used when `CACHE_ENABLED=false`. Always reports healthy.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheClient for NullCache {
    async fn health_check(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}
