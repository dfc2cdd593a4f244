//! 院校Repository接口定义

use async_trait::async_trait;

use crate::entities::establishment::{Establishment, EstablishmentInput, EstablishmentUpdate, Rating};
use crate::errors::DomainResult;
use crate::filters::EstablishmentFilter;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait EstablishmentRepository: Send + Sync {
    /// 按条件筛选院校
    async fn filter_establishments(
        &self,
        token: String,
        params: PaginationParams,
        filter: EstablishmentFilter,
    ) -> DomainResult<PaginatedResult<Establishment>>;

    async fn get_establishment(&self, token: String, id: i64) -> DomainResult<Establishment>;

    async fn create_establishment(&self, token: String, input: EstablishmentInput) -> DomainResult<Establishment>;

    async fn update_establishment(
        &self,
        token: String,
        id: i64,
        update: EstablishmentUpdate,
    ) -> DomainResult<Establishment>;

    async fn delete_establishment(&self, token: String, id: i64) -> DomainResult<()>;

    /// 为院校评分，上游不返回内容
    async fn rate_establishment(&self, token: String, id: i64, rating: Rating) -> DomainResult<()>;
}
