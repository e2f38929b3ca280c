use serde::{Deserialize, Serialize};

/// 应用配置结构体，与 config.toml 的各节一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,     // 0 表示按 CPU 数自动选择
    pub max_workers: usize, // workers 自动选择时的上限
    pub timeouts: ServerTimeouts,
    pub limits: ServerLimits,
}

/// 各项超时均为秒
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTimeouts {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerLimits {
    pub max_payload_size: usize,
}

/// JWT 配置，各有效期均为秒
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    // secret 不随配置回显
    #[serde(skip_serializing, default)]
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
    pub refresh_token_remember_me_expiry: i64,
}

/// Argon2 密码哈希参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

/// 数据库配置，后端类型从 url 的 scheme 推断，timeout 为秒
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub timeout: u64,
}

/// 缓存配置，default_ttl 为秒
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: String, // moka 或 redis
    pub default_ttl: u64,
    pub redis: RedisConfig,
    pub memory: MemoryCacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
    pub pool_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    pub max_capacity: u64,
}

/// CORS 白名单，任一列表填 "*" 表示放开该维度
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// 定时任务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// 提醒扫描间隔 (秒)
    #[serde(default = "default_tick_interval")]
    pub tick_interval: u64,
    /// 单次扫描处理的提醒数量上限
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_tick_interval(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_tick_interval() -> u64 {
    60
}

fn default_batch_size() -> u64 {
    100
}
