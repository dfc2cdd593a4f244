//! 学科领域Repository接口定义

use async_trait::async_trait;

use crate::entities::domain::{Domain, DomainInput, DomainUpdate};
use crate::errors::DomainResult;
use crate::pagination::{PaginatedResult, PaginationParams};

/// 返回的每条记录都须满足 `Domain` 的结构约束
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait DomainsRepository: Send + Sync {
    async fn get_domains(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Domain>>;

    async fn get_domain(&self, token: String, id: i64) -> DomainResult<Domain>;

    async fn create_domain(&self, token: String, input: DomainInput) -> DomainResult<Domain>;

    async fn update_domain(&self, token: String, id: i64, update: DomainUpdate) -> DomainResult<Domain>;

    async fn delete_domain(&self, token: String, id: i64) -> DomainResult<()>;
}
