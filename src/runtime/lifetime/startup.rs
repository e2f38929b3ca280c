//! 启动准备，存储、缓存与首启管理员账号

use crate::cache::{
    ObjectCache,
    register::{cache_backend_factory, registered_cache_backends},
};
use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 按名字尝试构造一个缓存后端
async fn try_cache_backend(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let factory = match cache_backend_factory(name) {
        Some(f) => f,
        None => {
            warn!("Unknown cache backend '{}', not registered", name);
            return None;
        }
    };

    match factory().await {
        Ok(cache) => {
            warn!("Cache backend '{}' is up", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Cache backend '{}' failed to initialize: {}", name, e);
            None
        }
    }
}

/// 构造配置指定的缓存，不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let cache_type = &AppConfig::get().cache.cache_type;

    if let Some(cache) = try_cache_backend(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to Moka (in-memory) cache backend");
        if let Some(cache) = try_cache_backend("moka").await {
            return Ok(cache);
        }
    }

    Err(format!("No usable cache backend (configured: {cache_type})").into())
}

fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    std::iter::repeat_with(|| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .take(length)
        .collect()
}

/// 空库首启时创建默认管理员
///
/// 密码取 ADMIN_PASSWORD 环境变量，未设置则生成随机密码并打印到日志。
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(0) => info!("Empty user table, seeding default admin account..."),
        Ok(count) => {
            debug!("User table has {} account(s), admin seed not needed", count);
            return;
        }
        Err(e) => {
            warn!("Could not count users ({}), admin seed skipped", e);
            return;
        }
    }

    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("----------------------------------------------------------");
        warn!("  ADMIN_PASSWORD not set, generated one instead:");
        warn!("      {}", pwd);
        warn!("  Save it now, it will not be printed again.");
        warn!("----------------------------------------------------------");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Could not hash admin password ({}), admin seed skipped", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        username: "admin".to_string(),
        email: "admin@classtrack.local".to_string(),
        password: password_hash,
        role: UserRole::Admin,
        display_name: Some("Administrator".to_string()),
        avatar_url: None,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => info!(
            "Seeded admin account (ID: {}, username: {})",
            user.id, user.username
        ),
        Err(e) => warn!("Admin account creation failed: {}", e),
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("rustls crypto provider install failed");

    if cfg!(debug_assertions) {
        debug!("Registered cache backends: {:?}", registered_cache_backends());
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("storage backend unavailable");
    warn!("Storage ready, migrations applied");

    seed_admin(&storage).await;

    let cache = create_cache().await.expect("cache backend unavailable");
    warn!("Cache ready");

    StartupContext { storage, cache }
}
