//! 会话 Cookie

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";
pub const USER_COOKIE: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieAttributes {
    pub http_only: bool,
    pub path: String,
    /// 有效期（秒）
    pub max_age: Option<i64>,
    pub expires: Option<DateTime<Utc>>,
    pub same_site: SameSite,
    pub secure: bool,
    pub domain: Option<String>,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            http_only: true,
            path: "/".to_string(),
            max_age: None,
            expires: None,
            same_site: SameSite::Lax,
            secure: true,
            domain: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub attributes: CookieAttributes,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, attributes: CookieAttributes) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attributes,
        }
    }
}

/// 一次登录产生的三个 Cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookies {
    pub access_token: Cookie,
    pub refresh_token: Cookie,
    pub user: Cookie,
}

impl IntoIterator for SessionCookies {
    type Item = Cookie;
    type IntoIter = std::array::IntoIter<Cookie, 3>;

    fn into_iter(self) -> Self::IntoIter {
        [self.access_token, self.refresh_token, self.user].into_iter()
    }
}
