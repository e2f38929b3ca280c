//! Redis 缓存后端，多实例部署时共享登录态

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Redis client init failed: {e}"))?;

        // 启动时同步 PING 一次，连不上立刻失败好让上层回退
        client
            .get_connection()
            .and_then(|mut conn| redis::cmd("PING").query::<String>(&mut conn))
            .map_err(|e| format!("Redis ping failed ({}): {e}", redis_config.url))?;

        debug!(
            "redis cache ready, prefix '{}', default ttl {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn prefixed(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Redis connection failed: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        match conn.get::<_, Option<String>>(self.prefixed(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Redis GET '{}' failed: {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Redis connection failed: {}", e);
                return;
            }
        };

        // ttl 为 0 时落到配置的默认值
        let effective_ttl = if ttl == 0 { self.default_ttl } else { ttl };
        let redis_key = self.prefixed(&key);

        if let Err(e) = conn
            .set_ex::<String, String, ()>(redis_key, value, effective_ttl)
            .await
        {
            error!("Redis SETEX '{}' failed: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Redis connection failed: {}", e);
                return;
            }
        };

        if let Err(e) = conn.del::<String, i32>(self.prefixed(key)).await {
            error!("Redis DEL '{}' failed: {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        warn!("invalidate_all is a no-op for RedisObjectCache, keys expire by TTL");
    }
}
