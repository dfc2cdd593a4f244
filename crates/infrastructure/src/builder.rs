use std::sync::Arc;

use application::{Clock, Repositories, SystemClock};
use config::AppConfig;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::{
    api_client::ApiClient,
    query_cache::QueryCache,
    repositories::{
        HttpAuthRepository, HttpChatRepository, HttpCitiesRepository, HttpDomainsRepository,
        HttpEstablishmentRepository, HttpEstablishmentTypeRepository, HttpFormationRepository,
        HttpLevelsRepository, HttpMentionsRepository, HttpRegionsRepository, HttpUsersRepository,
    },
    session_cookies::JwtSessionCookieService,
};

#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct Infrastructure {
    pub repositories: Repositories,
    pub cookie_service: Arc<JwtSessionCookieService>,
    pub query_cache: Arc<QueryCache>,
}

impl Infrastructure {
    pub fn build(config: &AppConfig) -> Result<Self, InfrastructureError> {
        Self::build_with_clock(config, Arc::new(SystemClock))
    }

    pub fn build_with_clock(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(&config.upstream.base_url())?;
        let client = ApiClient::new(base_url, config.upstream.timeout())?;
        info!(upstream = %client.base_url(), "upstream api client ready");

        let repositories = Repositories {
            auth: Arc::new(HttpAuthRepository::new(client.clone())),
            chat: Arc::new(HttpChatRepository::new(client.clone())),
            levels: Arc::new(HttpLevelsRepository::new(client.clone())),
            domains: Arc::new(HttpDomainsRepository::new(client.clone())),
            establishments: Arc::new(HttpEstablishmentRepository::new(client.clone())),
            establishment_types: Arc::new(HttpEstablishmentTypeRepository::new(client.clone())),
            cities: Arc::new(HttpCitiesRepository::new(client.clone())),
            regions: Arc::new(HttpRegionsRepository::new(client.clone())),
            mentions: Arc::new(HttpMentionsRepository::new(client.clone())),
            formations: Arc::new(HttpFormationRepository::new(client.clone())),
            users: Arc::new(HttpUsersRepository::new(client)),
        };

        let cookie_service = Arc::new(JwtSessionCookieService::new(&config.session, clock));
        let query_cache = Arc::new(QueryCache::new(config.cache.ttl(), config.cache.max_entries));

        Ok(Self {
            repositories,
            cookie_service,
            query_cache,
        })
    }
}
