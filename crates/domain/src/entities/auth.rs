//! 认证相关实体
//!
//! 定义登录凭证、令牌对、JWT 声明以及会话状态。

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::user::User;

/// 邮箱密码凭证
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// 请求一次性验证码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OtpRequest {
    #[validate(email)]
    pub email: String,
}

/// 一次性验证码凭证
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OtpCredentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub otp: String,
}

/// 验证码已发送
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRequested {
    pub message: String,
    #[serde(alias = "expiresInMinutes")]
    pub expires_in_minutes: u32,
}

/// 上游仅返回提示信息的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 登录或刷新后获得的令牌对
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// 解码后的 JWT 声明，只保留本服务关心的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// 过期时间（Unix 秒）
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, rename = "type", alias = "token_type")]
    pub token_type: Option<String>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub aud: Option<serde_json::Value>,
}

impl TokenPayload {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// 距离过期的剩余时间，已过期时为零
    pub fn time_until_expiry(&self, now: DateTime<Utc>) -> Duration {
        Duration::seconds((self.exp - now.timestamp()).max(0))
    }
}

/// 当前请求的会话
///
/// 完全由会话 Cookie 推导，服务端不保存任何会话状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: Option<User>,
    #[serde(skip)]
    pub access_token: Option<String>,
    #[serde(skip)]
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.access_token.as_deref().is_some_and(|token| !token.is_empty())
    }
}
