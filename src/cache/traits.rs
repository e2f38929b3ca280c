use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 键存在但无法取值 (例如后端连接失败)
    ExistsButNoValue,
}

impl<T> CacheResult<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// 对象缓存抽象，各后端通过插件方式注册
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 为 0 时使用配置中的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
