//! Redis connection handle.

use super::service::{CacheClient, CacheError, CacheResult};
use crate::config::mask_connection_string;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{info, warn};

/// Connection to the Redis cache service.
///
/// Wraps a `ConnectionManager`, which reconnects on its own and is cheap to
/// clone. Callers that need to issue commands take a clone via
/// [`RedisCache::connection`].
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
    address: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://redis:6379/0"`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        let address = mask_connection_string(redis_url);
        info!("Connecting to Redis at {}", address);

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis at {}", address);

        Ok(Self { manager, address })
    }

    /// Returns a handle for issuing commands.
    pub fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }
}

#[async_trait]
impl CacheClient for RedisCache {
    async fn health_check(&self) -> bool {
        let mut conn = self.manager.clone();
        match conn.ping::<()>().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Redis PING failed for {}: {}", self.address, e);
                false
            }
        }
    }

    fn describe(&self) -> String {
        self.address.clone()
    }
}
