//! 进程内 moka 缓存后端，单机部署的默认选择

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaObjectCache);

pub struct MokaObjectCache {
    inner: Cache<String, String>,
}

impl MokaObjectCache {
    pub fn new() -> Result<Self, String> {
        let cache = &AppConfig::get().cache;
        let inner = Cache::builder()
            .max_capacity(cache.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(cache.default_ttl))
            .build();

        debug!(
            "moka cache ready, capacity {} entries, ttl {}s",
            cache.memory.max_capacity, cache.default_ttl
        );
        Ok(Self { inner })
    }
}

#[async_trait]
impl ObjectCache for MokaObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => CacheResult::NotFound,
        }
    }

    // moka 的 TTL 在构建时全局设定，忽略单条 ttl 参数
    async fn insert_raw(&self, key: String, value: String, _ttl: u64) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
