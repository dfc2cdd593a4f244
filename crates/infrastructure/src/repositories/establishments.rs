use async_trait::async_trait;
use domain::{
    DomainResult, Establishment, EstablishmentFilter, EstablishmentInput, EstablishmentRepository,
    EstablishmentUpdate, FilterQuery, PaginatedResult, PaginationParams, Rating,
};

use crate::api_client::ApiClient;

pub struct HttpEstablishmentRepository {
    client: ApiClient,
}

impl HttpEstablishmentRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EstablishmentRepository for HttpEstablishmentRepository {
    async fn filter_establishments(
        &self,
        token: String,
        params: PaginationParams,
        filter: EstablishmentFilter,
    ) -> DomainResult<PaginatedResult<Establishment>> {
        let query = FilterQuery::new(params, filter).query_pairs();
        self.client
            .get("establishments/filter/", Some(&token), &query)
            .await
    }

    async fn get_establishment(&self, token: String, id: i64) -> DomainResult<Establishment> {
        self.client
            .get(&format!("establishments/{id}"), Some(&token), &[])
            .await
    }

    async fn create_establishment(&self, token: String, input: EstablishmentInput) -> DomainResult<Establishment> {
        self.client
            .post("establishments", Some(&token), &[], &input)
            .await
    }

    async fn update_establishment(
        &self,
        token: String,
        id: i64,
        update: EstablishmentUpdate,
    ) -> DomainResult<Establishment> {
        self.client
            .put(&format!("establishments/{id}"), Some(&token), &update)
            .await
    }

    async fn delete_establishment(&self, token: String, id: i64) -> DomainResult<()> {
        self.client
            .delete(&format!("establishments/{id}"), Some(&token))
            .await
    }

    async fn rate_establishment(&self, token: String, id: i64, rating: Rating) -> DomainResult<()> {
        self.client
            .post_no_content(&format!("establishments/{id}/rate"), Some(&token), &rating)
            .await
    }
}
