//! 基于上游 REST API 的 Repository 实现

mod auth;
mod catalogue;
mod chat;
mod establishments;
mod levels;
mod users;

pub use auth::HttpAuthRepository;
pub use catalogue::{
    HttpCitiesRepository, HttpDomainsRepository, HttpEstablishmentTypeRepository,
    HttpFormationRepository, HttpMentionsRepository, HttpRegionsRepository,
};
pub use chat::HttpChatRepository;
pub use establishments::HttpEstablishmentRepository;
pub use levels::HttpLevelsRepository;
pub use users::HttpUsersRepository;
