//! shop-config - 配置加载库
//!
//! 加载顺序（后者覆盖前者）：内置默认值 → `default.toml` → `{APP_ENV}.toml` → 环境变量

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 环境变量前缀，嵌套字段用 `__` 分隔，例如 `PRODUCT_STORE_SERVER__PORT`
pub const ENV_PREFIX: &str = "PRODUCT_STORE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` 形式的监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 遥测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 强制使用 JSON 日志（生产环境总是 JSON）
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
            metrics_enabled: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// HTTP 层配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cors_permissive: true,
        }
    }
}

/// 内存商品库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 启动时写入四条示例商品
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "product-store".to_string(),
            app_env: "development".to_string(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig::default(),
            http: HttpConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config: Self = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Serialized::default("app_env", &env))
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否使用 JSON 日志
    pub fn use_json_logs(&self) -> bool {
        self.is_production() || self.telemetry.json
    }
}
