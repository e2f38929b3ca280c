use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 常用环境变量到配置键的映射，优先级高于配置文件
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("app.environment", "APP_ENV"),
    ("app.log_level", "RUST_LOG"),
    ("server.host", "SERVER_HOST"),
    ("server.port", "SERVER_PORT"),
    ("server.unix_socket_path", "UNIX_SOCKET"),
    ("server.workers", "CPU_COUNT"),
    ("jwt.secret", "JWT_SECRET"),
    ("database.url", "DATABASE_URL"),
    ("cache.redis.url", "REDIS_URL"),
    ("cache.redis.key_prefix", "REDIS_KEY_PREFIX"),
    ("cache.redis.default_ttl", "REDIS_TTL"),
    ("scheduler.tick_interval", "SCHEDULER_TICK_INTERVAL"),
];

impl AppConfig {
    /// 加载配置，按 config.toml、config.{APP_ENV}.toml、环境变量的顺序叠加
    pub fn load() -> Result<Self, ConfigError> {
        let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{env_name}")).required(false))
            .add_source(
                Environment::with_prefix("CLASSTRACK")
                    .separator("_")
                    .try_parsing(true),
            );

        for (key, var) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        // workers 为 0 表示按 CPU 数自动选择
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 全局配置，init 之前调用会惰性加载
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Configuration error: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 启动时显式加载一次，加载失败直接返回错误而不是退出进程
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("configuration initialized twice".to_string()))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 配置了 unix_socket_path 时走 UDS，留空走 TCP
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        let path = self.server.unix_socket_path.as_str();
        (!path.is_empty()).then_some(path)
    }
}
