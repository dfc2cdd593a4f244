//! 认证Repository接口定义

use async_trait::async_trait;

use crate::entities::auth::{AuthTokens, Credentials, MessageResponse, OtpCredentials, OtpRequested};
use crate::entities::user::User;
use crate::errors::DomainResult;

/// 认证Repository接口
///
/// 凭证或令牌无效时返回 `DomainError::Unauthorized`。
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// 注册新用户
    async fn sign_up(&self, credentials: Credentials) -> DomainResult<User>;

    /// 邮箱密码登录
    async fn sign_in(&self, credentials: Credentials) -> DomainResult<AuthTokens>;

    /// 发送一次性验证码
    async fn request_otp(&self, email: String) -> DomainResult<OtpRequested>;

    /// 验证码登录
    async fn sign_in_otp(&self, credentials: OtpCredentials) -> DomainResult<AuthTokens>;

    /// 用刷新令牌换取新的令牌对
    async fn refresh(&self, refresh_token: String) -> DomainResult<AuthTokens>;

    /// 注销，使令牌对失效
    async fn sign_out(&self, access_token: String, refresh_token: String) -> DomainResult<MessageResponse>;

    /// 当前用户
    async fn me(&self, access_token: String) -> DomainResult<User>;
}
