//! 用户实体定义

use chrono::{DateTime, Utc};
use data_encoding::BASE64URL_NOPAD;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// 用户实体
///
/// 注册时由上游创建，登录和 `me` 时读取，本服务内不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,
    #[serde(default, alias = "createdBy")]
    pub created_by: Option<i64>,
    #[serde(default, alias = "updatedBy")]
    pub updated_by: Option<i64>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// 编码为 `user` Cookie 的值（JSON 的 base64url）
    pub fn to_cookie_value(&self) -> DomainResult<String> {
        let json = serde_json::to_vec(self)
            .map_err(|e| DomainError::validation_error("user", e.to_string()))?;
        Ok(BASE64URL_NOPAD.encode(&json))
    }

    /// 从 `user` Cookie 的值解码
    pub fn from_cookie_value(value: &str) -> DomainResult<Self> {
        let bytes = BASE64URL_NOPAD
            .decode(value.trim_end_matches('=').as_bytes())
            .map_err(|e| DomainError::decode(format!("user cookie: {}", e)))?;
        serde_json::from_slice(&bytes).map_err(|e| DomainError::decode(format!("user cookie: {}", e)))
    }
}
