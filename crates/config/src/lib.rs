//! 统一配置中心
//!
//! 提供应用的全局配置管理，包括：
//! - 服务监听地址与 CORS
//! - 上游 API 地址与超时
//! - 会话 Cookie 属性
//! - 查询缓存
//!
//! 加载顺序：默认值 -> 可选配置文件（`APP_CONFIG_FILE`）-> 环境变量（`APP_*`，`__` 分隔层级）。

use std::borrow::Cow;
use std::time::Duration;

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法加载配置: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("配置校验失败: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 上游 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpstreamConfig {
    #[validate(url)]
    pub prefix_url: String,
    #[validate(length(min = 1))]
    pub version: String,
    #[validate(range(min = 1))]
    pub timeout_seconds: u64,
}

impl UpstreamConfig {
    /// `{prefix_url}/{version}/`，末尾保留斜杠以便拼接相对路径
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}/",
            self.prefix_url.trim_end_matches('/'),
            self.version.trim_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// 会话 Cookie 配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionConfig {
    #[serde(default = "default_secure")]
    pub secure_cookies: bool,
    #[validate(custom(function = "validate_cookie_path"))]
    pub cookie_path: String,
    #[serde(default)]
    pub cookie_domain: Option<String>,
}

fn default_secure() -> bool {
    true
}

fn validate_cookie_path(path: &str) -> Result<(), ValidationError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(ValidationError::new("cookie_path")
            .with_message(Cow::Borrowed("cookie path must start with '/'")))
    }
}

/// 查询缓存配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CacheConfig {
    #[validate(range(min = 1))]
    pub ttl_seconds: u64,
    #[validate(range(min = 1))]
    pub max_entries: usize,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub upstream: UpstreamConfig,
    #[validate(nested)]
    pub session: SessionConfig,
    #[validate(nested)]
    pub cache: CacheConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 3000,
                cors_origins: vec!["*".into()],
            },
            upstream: UpstreamConfig {
                prefix_url: "http://localhost:8000/api".into(),
                version: "v1".into(),
                timeout_seconds: 30,
            },
            session: SessionConfig {
                secure_cookies: true,
                cookie_path: "/".into(),
                cookie_domain: None,
            },
            cache: CacheConfig {
                ttl_seconds: 60,
                max_entries: 1024,
            },
        }
    }
}

impl AppConfig {
    /// 默认值 -> 配置文件 -> 环境变量
    pub fn figment() -> Figment {
        let mut fig = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        if let Ok(path) = std::env::var("APP_CONFIG_FILE") {
            if path.ends_with(".yml") || path.ends_with(".yaml") {
                fig = fig.merge(Yaml::file(path));
            } else if path.ends_with(".json") {
                fig = fig.merge(Json::file(path));
            } else {
                fig = fig.merge(Toml::file(path));
            }
        }
        fig.merge(Env::prefixed("APP_").split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let cfg: AppConfig = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.upstream.base_url(), "http://localhost:8000/api/v1/");
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn base_url_normalises_slashes() {
        let upstream = UpstreamConfig {
            prefix_url: "https://api.example.com/api/".into(),
            version: "/v2/".into(),
            timeout_seconds: 5,
        };

        assert_eq!(upstream.base_url(), "https://api.example.com/api/v2/");
        assert_eq!(upstream.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn env_overrides_nested_values() {
        Jail::expect_with(|jail| {
            jail.set_env("APP_SERVER__PORT", "9000");
            jail.set_env("APP_UPSTREAM__PREFIX_URL", "https://api.example.com/api");
            jail.set_env("APP_SESSION__SECURE_COOKIES", "false");

            let config = AppConfig::load().map_err(|e| e.to_string())?;

            assert_eq!(config.server.port, 9000);
            assert_eq!(config.upstream.prefix_url, "https://api.example.com/api");
            assert!(!config.session.secure_cookies);
            assert_eq!(config.cache.ttl_seconds, 60);
            Ok(())
        });
    }

    #[test]
    fn config_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "portal.toml",
                r#"
                [cache]
                ttl_seconds = 5
                max_entries = 10
                "#,
            )?;
            jail.set_env("APP_CONFIG_FILE", "portal.toml");

            let config = AppConfig::load().map_err(|e| e.to_string())?;

            assert_eq!(config.cache.ttl_seconds, 5);
            assert_eq!(config.cache.max_entries, 10);
            Ok(())
        });
    }

    #[test]
    fn invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("APP_UPSTREAM__TIMEOUT_SECONDS", "0");
            assert!(matches!(AppConfig::load(), Err(ConfigError::Invalid(_))));
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.set_env("APP_SESSION__COOKIE_PATH", "app");
            assert!(matches!(AppConfig::load(), Err(ConfigError::Invalid(_))));
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.set_env("APP_UPSTREAM__PREFIX_URL", "not a url");
            assert!(matches!(AppConfig::load(), Err(ConfigError::Invalid(_))));
            Ok(())
        });
    }
}
