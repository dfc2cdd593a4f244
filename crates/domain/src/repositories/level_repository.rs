//! 层级Repository接口定义

use async_trait::async_trait;

use crate::entities::level::{Level, LevelInput, LevelUpdate};
use crate::errors::DomainResult;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait LevelsRepository: Send + Sync {
    async fn get_levels(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Level>>;

    /// 未知 id 返回 `DomainError::NotFound`
    async fn get_level(&self, token: String, id: i64) -> DomainResult<Level>;

    async fn create_level(&self, token: String, input: LevelInput) -> DomainResult<Level>;

    async fn update_level(&self, token: String, id: i64, update: LevelUpdate) -> DomainResult<Level>;

    async fn delete_level(&self, token: String, id: i64) -> DomainResult<()>;
}
