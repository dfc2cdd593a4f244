//! 参考目录 Repository：学科领域、院校类型、城市、大区、专业方向、培训项目

use async_trait::async_trait;
use domain::{
    CitiesRepository, City, CityFilter, Domain, DomainInput, DomainResult, DomainUpdate,
    DomainsRepository, EstablishmentType, EstablishmentTypeRepository, FilterQuery, Formation,
    FormationFilter, FormationRepository, Mention, MentionsRepository, PaginatedResult,
    PaginationParams, Region, RegionsRepository,
};

use crate::api_client::ApiClient;

pub struct HttpDomainsRepository {
    client: ApiClient,
}

impl HttpDomainsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DomainsRepository for HttpDomainsRepository {
    /// 每条记录都按 `Domain` 的结构约束校验
    async fn get_domains(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Domain>> {
        let page: PaginatedResult<serde_json::Value> = self
            .client
            .get("domains/", Some(&token), &params.query_pairs())
            .await?;
        page.try_map_items(Domain::parse)
    }

    async fn get_domain(&self, token: String, id: i64) -> DomainResult<Domain> {
        let value = self
            .client
            .get(&format!("domains/{id}"), Some(&token), &[])
            .await?;
        Domain::parse(value)
    }

    async fn create_domain(&self, token: String, input: DomainInput) -> DomainResult<Domain> {
        let value = self.client.post("domains", Some(&token), &[], &input).await?;
        Domain::parse(value)
    }

    async fn update_domain(&self, token: String, id: i64, update: DomainUpdate) -> DomainResult<Domain> {
        let value = self
            .client
            .put(&format!("domains/{id}"), Some(&token), &update)
            .await?;
        Domain::parse(value)
    }

    async fn delete_domain(&self, token: String, id: i64) -> DomainResult<()> {
        self.client.delete(&format!("domains/{id}"), Some(&token)).await
    }
}

pub struct HttpEstablishmentTypeRepository {
    client: ApiClient,
}

impl HttpEstablishmentTypeRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EstablishmentTypeRepository for HttpEstablishmentTypeRepository {
    async fn get_establishment_types(
        &self,
        token: String,
        params: PaginationParams,
    ) -> DomainResult<PaginatedResult<EstablishmentType>> {
        self.client
            .get("establishment-types/", Some(&token), &params.query_pairs())
            .await
    }
}

pub struct HttpCitiesRepository {
    client: ApiClient,
}

impl HttpCitiesRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CitiesRepository for HttpCitiesRepository {
    async fn get_cities(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<City>> {
        self.client
            .get("cities/", Some(&token), &params.query_pairs())
            .await
    }

    async fn filter_cities(
        &self,
        token: String,
        params: PaginationParams,
        filter: CityFilter,
    ) -> DomainResult<PaginatedResult<City>> {
        let query = FilterQuery::new(params, filter).query_pairs();
        self.client.get("cities/filter/", Some(&token), &query).await
    }
}

pub struct HttpRegionsRepository {
    client: ApiClient,
}

impl HttpRegionsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegionsRepository for HttpRegionsRepository {
    async fn get_regions(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Region>> {
        self.client
            .get("regions/", Some(&token), &params.query_pairs())
            .await
    }
}

pub struct HttpMentionsRepository {
    client: ApiClient,
}

impl HttpMentionsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MentionsRepository for HttpMentionsRepository {
    async fn get_mentions(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Mention>> {
        self.client
            .get("mentions/", Some(&token), &params.query_pairs())
            .await
    }
}

pub struct HttpFormationRepository {
    client: ApiClient,
}

impl HttpFormationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FormationRepository for HttpFormationRepository {
    async fn get_formations(&self, token: String, params: PaginationParams) -> DomainResult<PaginatedResult<Formation>> {
        self.client
            .get("formations/", Some(&token), &params.query_pairs())
            .await
    }

    async fn filter_formations(
        &self,
        token: String,
        params: PaginationParams,
        filter: FormationFilter,
    ) -> DomainResult<PaginatedResult<Formation>> {
        let query = FilterQuery::new(params, filter).query_pairs();
        self.client
            .get("formations/filter/", Some(&token), &query)
            .await
    }
}
