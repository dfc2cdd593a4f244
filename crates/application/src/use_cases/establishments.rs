//! 院校用例

use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    Establishment, EstablishmentFilter, EstablishmentInput, EstablishmentRepository,
    EstablishmentUpdate, FilterQuery, PaginatedResult, Rating,
};

use crate::error::ApplicationResult;
use crate::use_case::{Authorized, UseCase};

pub struct FilterEstablishmentsUseCase {
    establishment_repository: Arc<dyn EstablishmentRepository>,
}

impl FilterEstablishmentsUseCase {
    pub fn new(establishment_repository: Arc<dyn EstablishmentRepository>) -> Self {
        Self {
            establishment_repository,
        }
    }
}

#[async_trait]
impl UseCase for FilterEstablishmentsUseCase {
    type Input = Authorized<FilterQuery<EstablishmentFilter>>;
    type Output = PaginatedResult<Establishment>;

    async fn execute(
        &self,
        input: Authorized<FilterQuery<EstablishmentFilter>>,
    ) -> ApplicationResult<PaginatedResult<Establishment>> {
        let FilterQuery { params, filter } = input.payload;
        Ok(self
            .establishment_repository
            .filter_establishments(input.token, params, filter)
            .await?)
    }
}

pub struct GetEstablishmentUseCase {
    establishment_repository: Arc<dyn EstablishmentRepository>,
}

impl GetEstablishmentUseCase {
    pub fn new(establishment_repository: Arc<dyn EstablishmentRepository>) -> Self {
        Self {
            establishment_repository,
        }
    }
}

#[async_trait]
impl UseCase for GetEstablishmentUseCase {
    type Input = Authorized<i64>;
    type Output = Establishment;

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<Establishment> {
        Ok(self
            .establishment_repository
            .get_establishment(input.token, input.payload)
            .await?)
    }
}

pub struct CreateEstablishmentUseCase {
    establishment_repository: Arc<dyn EstablishmentRepository>,
}

impl CreateEstablishmentUseCase {
    pub fn new(establishment_repository: Arc<dyn EstablishmentRepository>) -> Self {
        Self {
            establishment_repository,
        }
    }
}

#[async_trait]
impl UseCase for CreateEstablishmentUseCase {
    type Input = Authorized<EstablishmentInput>;
    type Output = Establishment;

    async fn execute(&self, input: Authorized<EstablishmentInput>) -> ApplicationResult<Establishment> {
        Ok(self
            .establishment_repository
            .create_establishment(input.token, input.payload)
            .await?)
    }
}

pub struct UpdateEstablishmentUseCase {
    establishment_repository: Arc<dyn EstablishmentRepository>,
}

impl UpdateEstablishmentUseCase {
    pub fn new(establishment_repository: Arc<dyn EstablishmentRepository>) -> Self {
        Self {
            establishment_repository,
        }
    }
}

#[async_trait]
impl UseCase for UpdateEstablishmentUseCase {
    type Input = Authorized<(i64, EstablishmentUpdate)>;
    type Output = Establishment;

    async fn execute(
        &self,
        input: Authorized<(i64, EstablishmentUpdate)>,
    ) -> ApplicationResult<Establishment> {
        let (id, update) = input.payload;
        Ok(self
            .establishment_repository
            .update_establishment(input.token, id, update)
            .await?)
    }
}

pub struct DeleteEstablishmentUseCase {
    establishment_repository: Arc<dyn EstablishmentRepository>,
}

impl DeleteEstablishmentUseCase {
    pub fn new(establishment_repository: Arc<dyn EstablishmentRepository>) -> Self {
        Self {
            establishment_repository,
        }
    }
}

#[async_trait]
impl UseCase for DeleteEstablishmentUseCase {
    type Input = Authorized<i64>;
    type Output = ();

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<()> {
        Ok(self
            .establishment_repository
            .delete_establishment(input.token, input.payload)
            .await?)
    }
}

pub struct RateEstablishmentUseCase {
    establishment_repository: Arc<dyn EstablishmentRepository>,
}

impl RateEstablishmentUseCase {
    pub fn new(establishment_repository: Arc<dyn EstablishmentRepository>) -> Self {
        Self {
            establishment_repository,
        }
    }
}

#[async_trait]
impl UseCase for RateEstablishmentUseCase {
    type Input = Authorized<(i64, Rating)>;
    type Output = ();

    async fn execute(&self, input: Authorized<(i64, Rating)>) -> ApplicationResult<()> {
        let (id, rating) = input.payload;
        Ok(self
            .establishment_repository
            .rate_establishment(input.token, id, rating)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{AuditInfo, MockEstablishmentRepository, PaginationParams};
    use mockall::predicate::eq;

    fn establishment() -> Establishment {
        Establishment {
            id: 12,
            name: "Université d'Antananarivo".to_string(),
            acronym: Some("UA".to_string()),
            address: None,
            contacts: None,
            website: None,
            description: None,
            legal_status: Some("public".to_string()),
            latitude: None,
            longitude: None,
            establishment_type_id: Some(1),
            city_id: Some(3),
            audit: AuditInfo::default(),
        }
    }

    #[tokio::test]
    async fn filter_forwards_params_and_filter() {
        let params = PaginationParams::default();
        let filter = EstablishmentFilter {
            city_ids: vec![3],
            ..Default::default()
        };
        let mut page = PaginatedResult::empty(params);
        page.items = vec![establishment()];
        page.total_items = 1;
        page.total_pages = 1;

        let mut repo = MockEstablishmentRepository::new();
        let expected = page.clone();
        repo.expect_filter_establishments()
            .with(eq("token".to_string()), eq(params), eq(filter.clone()))
            .times(1)
            .returning(move |_, _, _| Ok(expected.clone()));

        let result = FilterEstablishmentsUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", FilterQuery::new(params, filter)))
            .await
            .unwrap();

        assert_eq!(result, page);
    }

    #[tokio::test]
    async fn get_establishment_returns_record() {
        let mut repo = MockEstablishmentRepository::new();
        repo.expect_get_establishment()
            .with(eq("token".to_string()), eq(12))
            .times(1)
            .returning(|_, _| Ok(establishment()));

        let result = GetEstablishmentUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", 12))
            .await
            .unwrap();

        assert_eq!(result, establishment());
    }

    #[tokio::test]
    async fn update_establishment_forwards_partial_changes() {
        let update = EstablishmentUpdate {
            website: Some("https://ua.mg".to_string()),
            ..EstablishmentUpdate::default()
        };
        let mut repo = MockEstablishmentRepository::new();
        repo.expect_update_establishment()
            .with(eq("token".to_string()), eq(12), eq(update.clone()))
            .times(1)
            .returning(|_, _, _| Ok(establishment()));

        let result = UpdateEstablishmentUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", (12, update)))
            .await
            .unwrap();

        assert_eq!(result.id, 12);
    }

    #[tokio::test]
    async fn rating_is_forwarded_with_its_establishment() {
        let mut repo = MockEstablishmentRepository::new();
        repo.expect_rate_establishment()
            .with(eq("token".to_string()), eq(12), eq(Rating { rating: 4 }))
            .times(1)
            .returning(|_, _, _| Ok(()));
        repo.expect_delete_establishment().never();

        RateEstablishmentUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", (12, Rating { rating: 4 })))
            .await
            .unwrap();
    }
}
