//! 领域实体定义
//!
//! 包含门户的核心实体：用户、令牌、会话 Cookie、聊天、学科领域、层级、院校及参考目录。

pub mod audit;
pub mod auth;
pub mod catalogue;
pub mod chat;
pub mod cookie;
pub mod domain;
pub mod establishment;
pub mod level;
pub mod user;

// 重新导出核心实体
pub use audit::AuditInfo;
pub use auth::{
    AuthTokens, Credentials, MessageResponse, OtpCredentials, OtpRequest, OtpRequested, Session,
    TokenPayload,
};
pub use catalogue::{City, EstablishmentType, Formation, Mention, Region};
pub use chat::{
    ChatFormation, ChatHistoryResponse, ChatInput, ChatResponse, ChatResponseData,
    FoundEstablishment,
};
pub use cookie::{
    Cookie, CookieAttributes, SameSite, SessionCookies, ACCESS_TOKEN_COOKIE,
    REFRESH_TOKEN_COOKIE, USER_COOKIE,
};
pub use domain::{Domain, DomainInput, DomainUpdate};
pub use establishment::{Establishment, EstablishmentInput, EstablishmentUpdate, Rating};
pub use level::{Level, LevelInput, LevelUpdate};
pub use user::User;
