//! 用例抽象
//!
//! 每个用例只负责一个业务操作：把输入原样交给 Repository，再把结果原样返回。

use async_trait::async_trait;

use crate::error::ApplicationResult;

#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> ApplicationResult<Self::Output>;
}

/// 已通过令牌检查的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized<T> {
    pub token: String,
    pub payload: T,
}

impl<T> Authorized<T> {
    pub fn new(token: impl Into<String>, payload: T) -> Self {
        Self {
            token: token.into(),
            payload,
        }
    }
}
