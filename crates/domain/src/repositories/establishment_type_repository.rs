//! 院校类型Repository接口定义

use async_trait::async_trait;

use crate::entities::catalogue::EstablishmentType;
use crate::errors::DomainResult;
use crate::pagination::{PaginatedResult, PaginationParams};

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait EstablishmentTypeRepository: Send + Sync {
    async fn get_establishment_types(
        &self,
        token: String,
        params: PaginationParams,
    ) -> DomainResult<PaginatedResult<EstablishmentType>>;
}
