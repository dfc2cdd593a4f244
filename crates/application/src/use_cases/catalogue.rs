//! 参考目录用例：学科领域、院校类型、城市、大区、专业方向、培训项目

use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    CitiesRepository, City, CityFilter, Domain, DomainInput, DomainUpdate, DomainsRepository,
    EstablishmentType, EstablishmentTypeRepository, FilterQuery, Formation, FormationFilter,
    FormationRepository, Mention, MentionsRepository, PaginatedResult, PaginationParams, Region,
    RegionsRepository,
};

use crate::error::ApplicationResult;
use crate::use_case::{Authorized, UseCase};

pub struct GetDomainsUseCase {
    domains_repository: Arc<dyn DomainsRepository>,
}

impl GetDomainsUseCase {
    pub fn new(domains_repository: Arc<dyn DomainsRepository>) -> Self {
        Self { domains_repository }
    }
}

#[async_trait]
impl UseCase for GetDomainsUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<Domain>;

    async fn execute(&self, input: Authorized<PaginationParams>) -> ApplicationResult<PaginatedResult<Domain>> {
        Ok(self
            .domains_repository
            .get_domains(input.token, input.payload)
            .await?)
    }
}

pub struct GetDomainUseCase {
    domains_repository: Arc<dyn DomainsRepository>,
}

impl GetDomainUseCase {
    pub fn new(domains_repository: Arc<dyn DomainsRepository>) -> Self {
        Self { domains_repository }
    }
}

#[async_trait]
impl UseCase for GetDomainUseCase {
    type Input = Authorized<i64>;
    type Output = Domain;

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<Domain> {
        Ok(self
            .domains_repository
            .get_domain(input.token, input.payload)
            .await?)
    }
}

pub struct CreateDomainUseCase {
    domains_repository: Arc<dyn DomainsRepository>,
}

impl CreateDomainUseCase {
    pub fn new(domains_repository: Arc<dyn DomainsRepository>) -> Self {
        Self { domains_repository }
    }
}

#[async_trait]
impl UseCase for CreateDomainUseCase {
    type Input = Authorized<DomainInput>;
    type Output = Domain;

    async fn execute(&self, input: Authorized<DomainInput>) -> ApplicationResult<Domain> {
        Ok(self
            .domains_repository
            .create_domain(input.token, input.payload)
            .await?)
    }
}

pub struct UpdateDomainUseCase {
    domains_repository: Arc<dyn DomainsRepository>,
}

impl UpdateDomainUseCase {
    pub fn new(domains_repository: Arc<dyn DomainsRepository>) -> Self {
        Self { domains_repository }
    }
}

#[async_trait]
impl UseCase for UpdateDomainUseCase {
    type Input = Authorized<(i64, DomainUpdate)>;
    type Output = Domain;

    async fn execute(&self, input: Authorized<(i64, DomainUpdate)>) -> ApplicationResult<Domain> {
        let (id, update) = input.payload;
        Ok(self
            .domains_repository
            .update_domain(input.token, id, update)
            .await?)
    }
}

pub struct DeleteDomainUseCase {
    domains_repository: Arc<dyn DomainsRepository>,
}

impl DeleteDomainUseCase {
    pub fn new(domains_repository: Arc<dyn DomainsRepository>) -> Self {
        Self { domains_repository }
    }
}

#[async_trait]
impl UseCase for DeleteDomainUseCase {
    type Input = Authorized<i64>;
    type Output = ();

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<()> {
        Ok(self
            .domains_repository
            .delete_domain(input.token, input.payload)
            .await?)
    }
}

pub struct GetEstablishmentTypesUseCase {
    establishment_type_repository: Arc<dyn EstablishmentTypeRepository>,
}

impl GetEstablishmentTypesUseCase {
    pub fn new(establishment_type_repository: Arc<dyn EstablishmentTypeRepository>) -> Self {
        Self {
            establishment_type_repository,
        }
    }
}

#[async_trait]
impl UseCase for GetEstablishmentTypesUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<EstablishmentType>;

    async fn execute(
        &self,
        input: Authorized<PaginationParams>,
    ) -> ApplicationResult<PaginatedResult<EstablishmentType>> {
        Ok(self
            .establishment_type_repository
            .get_establishment_types(input.token, input.payload)
            .await?)
    }
}

pub struct GetCitiesUseCase {
    cities_repository: Arc<dyn CitiesRepository>,
}

impl GetCitiesUseCase {
    pub fn new(cities_repository: Arc<dyn CitiesRepository>) -> Self {
        Self { cities_repository }
    }
}

#[async_trait]
impl UseCase for GetCitiesUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<City>;

    async fn execute(&self, input: Authorized<PaginationParams>) -> ApplicationResult<PaginatedResult<City>> {
        Ok(self
            .cities_repository
            .get_cities(input.token, input.payload)
            .await?)
    }
}

pub struct FilterCitiesUseCase {
    cities_repository: Arc<dyn CitiesRepository>,
}

impl FilterCitiesUseCase {
    pub fn new(cities_repository: Arc<dyn CitiesRepository>) -> Self {
        Self { cities_repository }
    }
}

#[async_trait]
impl UseCase for FilterCitiesUseCase {
    type Input = Authorized<FilterQuery<CityFilter>>;
    type Output = PaginatedResult<City>;

    async fn execute(&self, input: Authorized<FilterQuery<CityFilter>>) -> ApplicationResult<PaginatedResult<City>> {
        let FilterQuery { params, filter } = input.payload;
        Ok(self
            .cities_repository
            .filter_cities(input.token, params, filter)
            .await?)
    }
}

pub struct GetRegionsUseCase {
    regions_repository: Arc<dyn RegionsRepository>,
}

impl GetRegionsUseCase {
    pub fn new(regions_repository: Arc<dyn RegionsRepository>) -> Self {
        Self { regions_repository }
    }
}

#[async_trait]
impl UseCase for GetRegionsUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<Region>;

    async fn execute(&self, input: Authorized<PaginationParams>) -> ApplicationResult<PaginatedResult<Region>> {
        Ok(self
            .regions_repository
            .get_regions(input.token, input.payload)
            .await?)
    }
}

pub struct GetMentionsUseCase {
    mentions_repository: Arc<dyn MentionsRepository>,
}

impl GetMentionsUseCase {
    pub fn new(mentions_repository: Arc<dyn MentionsRepository>) -> Self {
        Self { mentions_repository }
    }
}

#[async_trait]
impl UseCase for GetMentionsUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<Mention>;

    async fn execute(&self, input: Authorized<PaginationParams>) -> ApplicationResult<PaginatedResult<Mention>> {
        Ok(self
            .mentions_repository
            .get_mentions(input.token, input.payload)
            .await?)
    }
}

pub struct GetFormationsUseCase {
    formation_repository: Arc<dyn FormationRepository>,
}

impl GetFormationsUseCase {
    pub fn new(formation_repository: Arc<dyn FormationRepository>) -> Self {
        Self { formation_repository }
    }
}

#[async_trait]
impl UseCase for GetFormationsUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<Formation>;

    async fn execute(&self, input: Authorized<PaginationParams>) -> ApplicationResult<PaginatedResult<Formation>> {
        Ok(self
            .formation_repository
            .get_formations(input.token, input.payload)
            .await?)
    }
}

pub struct FilterFormationsUseCase {
    formation_repository: Arc<dyn FormationRepository>,
}

impl FilterFormationsUseCase {
    pub fn new(formation_repository: Arc<dyn FormationRepository>) -> Self {
        Self { formation_repository }
    }
}

#[async_trait]
impl UseCase for FilterFormationsUseCase {
    type Input = Authorized<FilterQuery<FormationFilter>>;
    type Output = PaginatedResult<Formation>;

    async fn execute(
        &self,
        input: Authorized<FilterQuery<FormationFilter>>,
    ) -> ApplicationResult<PaginatedResult<Formation>> {
        let FilterQuery { params, filter } = input.payload;
        Ok(self
            .formation_repository
            .filter_formations(input.token, params, filter)
            .await?)
    }
}
