//! 城市Repository接口定义

use async_trait::async_trait;

use crate::entities::catalogue::City;
use crate::errors::DomainResult;
use crate::filters::CityFilter;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait CitiesRepository: Send + Sync {
    async fn get_cities(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<City>>;

    async fn filter_cities(
        &self,
        token: String,
        params: PaginationParams,
        filter: CityFilter,
    ) -> DomainResult<PaginatedResult<City>>;
}
