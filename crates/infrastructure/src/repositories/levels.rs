use async_trait::async_trait;
use domain::{
    DomainResult, Level, LevelInput, LevelUpdate, LevelsRepository, PaginatedResult,
    PaginationParams,
};

use crate::api_client::ApiClient;

pub struct HttpLevelsRepository {
    client: ApiClient,
}

impl HttpLevelsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LevelsRepository for HttpLevelsRepository {
    async fn get_levels(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Level>> {
        self.client
            .get("levels/", Some(&token), &params.query_pairs())
            .await
    }

    async fn get_level(&self, token: String, id: i64) -> DomainResult<Level> {
        self.client
            .get(&format!("levels/{id}"), Some(&token), &[])
            .await
    }

    async fn create_level(&self, token: String, input: LevelInput) -> DomainResult<Level> {
        self.client.post("levels/", Some(&token), &[], &input).await
    }

    async fn update_level(&self, token: String, id: i64, update: LevelUpdate) -> DomainResult<Level> {
        self.client
            .put(&format!("levels/{id}/"), Some(&token), &update)
            .await
    }

    async fn delete_level(&self, token: String, id: i64) -> DomainResult<()> {
        self.client.delete(&format!("levels/{id}/"), Some(&token)).await
    }
}
