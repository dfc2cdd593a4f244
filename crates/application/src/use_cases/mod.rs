//! 用例
//!
//! 每个用例持有自己的 Repository，把输入原样转发并原样返回结果，不做重试、校验或转换。
//! 登录类用例额外通过 `SessionCookieService` 生成会话 Cookie。

pub mod auth;
pub mod catalogue;
pub mod chat;
pub mod establishments;
pub mod levels;
pub mod users;

pub use auth::{
    GetCurrentUserUseCase, RefreshTokenUseCase, RequestOtpUseCase, SignInOtpUseCase,
    SignInUseCase, SignOutRequest, SignOutUseCase, SignUpUseCase,
};
pub use catalogue::{
    CreateDomainUseCase, DeleteDomainUseCase, FilterCitiesUseCase, FilterFormationsUseCase,
    GetCitiesUseCase, GetDomainUseCase, GetDomainsUseCase, GetEstablishmentTypesUseCase,
    GetFormationsUseCase, GetMentionsUseCase, GetRegionsUseCase, UpdateDomainUseCase,
};
pub use chat::{GetChatHistoryUseCase, SendChatMessageUseCase};
pub use establishments::{
    CreateEstablishmentUseCase, DeleteEstablishmentUseCase, FilterEstablishmentsUseCase,
    GetEstablishmentUseCase, RateEstablishmentUseCase, UpdateEstablishmentUseCase,
};
pub use levels::{
    CreateLevelUseCase, DeleteLevelUseCase, GetLevelUseCase, GetLevelsUseCase, UpdateLevelUseCase,
};
pub use users::{GetUserByEmailUseCase, GetUserByIdUseCase};
