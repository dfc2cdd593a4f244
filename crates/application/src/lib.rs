//! 应用层实现。
//!
//! 这里提供围绕领域模型的用例与控制器，以及对外部适配器
//! （会话 Cookie 签发、缓存失效）的抽象。

pub mod actions;
pub mod clock;
pub mod container;
pub mod controllers;
pub mod error;
pub mod revalidation;
pub mod session;
pub mod use_case;
pub mod use_cases;

pub use actions::{UpdateFiltersAction, ESTABLISHMENTS_PATH};
pub use clock::{Clock, FixedClock, SystemClock};
pub use container::{ApplicationContainer, Repositories};
pub use controllers::{Controller, RefreshTokenController, SecuredController, SignOutController, MUST_BE_LOGGED_IN};
pub use error::{ApplicationError, ApplicationResult};
pub use revalidation::CacheRevalidator;
pub use session::{SessionCookieService, SessionGrant};
pub use use_case::{Authorized, UseCase};
