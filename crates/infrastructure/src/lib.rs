//! 基础设施层实现。
//!
//! 提供上游 REST API 客户端、基于它的 Repository 实现、会话 Cookie 签发和查询缓存，
//! 实现应用/领域层定义的接口。

pub mod api_client;
pub mod builder;
pub mod query_cache;
pub mod repositories;
pub mod session_cookies;

pub use api_client::ApiClient;
pub use builder::{Infrastructure, InfrastructureError};
pub use query_cache::QueryCache;
pub use repositories::{
    HttpAuthRepository, HttpChatRepository, HttpCitiesRepository, HttpDomainsRepository,
    HttpEstablishmentRepository, HttpEstablishmentTypeRepository, HttpFormationRepository,
    HttpLevelsRepository, HttpMentionsRepository, HttpRegionsRepository, HttpUsersRepository,
};
pub use session_cookies::JwtSessionCookieService;
