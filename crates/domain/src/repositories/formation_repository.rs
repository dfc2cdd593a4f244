//! 培训项目Repository接口定义

use async_trait::async_trait;

use crate::entities::catalogue::Formation;
use crate::errors::DomainResult;
use crate::filters::FormationFilter;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait FormationRepository: Send + Sync {
    async fn get_formations(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Formation>>;

    async fn filter_formations(
        &self,
        token: String,
        params: PaginationParams,
        filter: FormationFilter,
    ) -> DomainResult<PaginatedResult<Formation>>;
}
