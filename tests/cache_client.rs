use product_status::config::Config;
use product_status::infrastructure::cache::{self, CacheError, RedisCache};

#[tokio::test]
async fn test_disabled_cache_uses_null_client() {
    let config = Config {
        cache_enabled: false,
        ..Config::default()
    };

    let client = cache::connect(&config).await.unwrap();

    assert!(client.health_check().await);
    assert_eq!(client.describe(), "disabled");
}

#[tokio::test]
async fn test_invalid_redis_url_is_a_connection_error() {
    let err = RedisCache::connect("redis//missing-colon").await.err().unwrap();

    assert!(matches!(err, CacheError::Connection(_)));
    assert!(err.to_string().starts_with("Cache connection error:"));
}
