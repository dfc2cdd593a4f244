//! 会话 Cookie 服务接口

use domain::{AuthTokens, Cookie, SessionCookies, User};

use crate::error::ApplicationResult;

/// 根据令牌对签发会话 Cookie
pub trait SessionCookieService: Send + Sync {
    /// 生成 `accessToken`、`refreshToken` 与 `user` 三个 Cookie，过期时间取令牌的 `exp`
    fn create_session_cookies(&self, tokens: &AuthTokens) -> ApplicationResult<SessionCookies>;

    /// 生成清除会话用的已过期 Cookie
    fn expired_session_cookies(&self) -> Vec<Cookie>;
}

/// 登录、验证码登录或刷新成功后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub user: User,
    pub cookies: SessionCookies,
}

impl SessionGrant {
    /// 新签发的访问令牌
    pub fn access_token(&self) -> &str {
        &self.cookies.access_token.value
    }
}
