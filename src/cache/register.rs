//! 缓存后端注册表，后端通过宏在启动前自行注册

use crate::cache::traits::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type CacheInitFuture = Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type CacheFactory = Arc<dyn Fn() -> CacheInitFuture + Send + Sync>;

// 后端数量很少，线性查找足够
static CACHE_BACKENDS: Lazy<RwLock<Vec<(&'static str, CacheFactory)>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 注册一个缓存后端，同名后端以后注册的为准
pub fn register_cache_backend(name: &'static str, factory: CacheFactory) {
    let mut backends = CACHE_BACKENDS.write().expect("cache backend registry lock poisoned");
    backends.retain(|(n, _)| *n != name);
    backends.push((name, factory));
}

pub fn cache_backend_factory(name: &str) -> Option<CacheFactory> {
    CACHE_BACKENDS
        .read()
        .expect("cache backend registry lock poisoned")
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, factory)| factory.clone())
}

pub fn registered_cache_backends() -> Vec<&'static str> {
    CACHE_BACKENDS
        .read()
        .expect("cache backend registry lock poisoned")
        .iter()
        .map(|(n, _)| *n)
        .collect()
}
