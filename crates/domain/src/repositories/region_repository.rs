//! 大区Repository接口定义

use async_trait::async_trait;

use crate::entities::catalogue::Region;
use crate::errors::DomainResult;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait RegionsRepository: Send + Sync {
    async fn get_regions(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Region>>;
}
