//! 用户查询Repository接口定义

use async_trait::async_trait;

use crate::entities::user::User;
use crate::errors::DomainResult;

/// 按邮箱或 id 读取用户，两者都是幂等读取；找不到用户时返回 `DomainError::NotFound`
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn get_user_by_email(&self, token: String, email: String) -> DomainResult<User>;

    async fn get_user_by_id(&self, token: String, id: i64) -> DomainResult<User>;
}
