//! 专业方向Repository接口定义

use async_trait::async_trait;

use crate::entities::catalogue::Mention;
use crate::errors::DomainResult;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait MentionsRepository: Send + Sync {
    async fn get_mentions(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Mention>>;
}
