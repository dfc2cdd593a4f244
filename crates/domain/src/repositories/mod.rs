//! Repository接口定义
//!
//! 定义上游数据访问的抽象接口，遵循清洁架构原则，内层定义接口，外层实现接口。
//! 所有读取操作都是幂等的；带令牌的操作按调用方令牌限定范围。

pub mod auth_repository;
pub mod chat_repository;
pub mod city_repository;
pub mod domain_repository;
pub mod establishment_repository;
pub mod establishment_type_repository;
pub mod formation_repository;
pub mod level_repository;
pub mod mention_repository;
pub mod region_repository;
pub mod users_repository;

// 重新导出所有Repository特征
pub use auth_repository::AuthRepository;
pub use chat_repository::ChatRepository;
pub use city_repository::CitiesRepository;
pub use domain_repository::DomainsRepository;
pub use establishment_repository::EstablishmentRepository;
pub use establishment_type_repository::EstablishmentTypeRepository;
pub use formation_repository::FormationRepository;
pub use level_repository::LevelsRepository;
pub use mention_repository::MentionsRepository;
pub use region_repository::RegionsRepository;
pub use users_repository::UsersRepository;

#[cfg(feature = "testing")]
pub use auth_repository::MockAuthRepository;
#[cfg(feature = "testing")]
pub use chat_repository::MockChatRepository;
#[cfg(feature = "testing")]
pub use city_repository::MockCitiesRepository;
#[cfg(feature = "testing")]
pub use domain_repository::MockDomainsRepository;
#[cfg(feature = "testing")]
pub use establishment_repository::MockEstablishmentRepository;
#[cfg(feature = "testing")]
pub use establishment_type_repository::MockEstablishmentTypeRepository;
#[cfg(feature = "testing")]
pub use formation_repository::MockFormationRepository;
#[cfg(feature = "testing")]
pub use level_repository::MockLevelsRepository;
#[cfg(feature = "testing")]
pub use mention_repository::MockMentionsRepository;
#[cfg(feature = "testing")]
pub use region_repository::MockRegionsRepository;
#[cfg(feature = "testing")]
pub use users_repository::MockUsersRepository;
