//! 门户核心领域模型
//!
//! 包含用户、令牌、会话 Cookie、聊天、学科领域、层级、院校等实体，
//! 以及上游数据访问的 Repository 接口。

pub mod entities;
pub mod errors;
pub mod filters;
pub mod pagination;
pub mod repositories;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use filters::*;
pub use pagination::*;
pub use repositories::*;
