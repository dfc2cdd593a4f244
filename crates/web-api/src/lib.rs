//! Web API 层。
//!
//! 提供 Axum 路由，从 Cookie 还原会话后把请求委托给应用层的控制器，
//! 并负责会话 Cookie 的写入与清除。

mod auth_routes;
mod catalogue_routes;
mod chat_routes;
mod error;
mod establishment_routes;
mod routes;
mod session;
mod state;
mod users_routes;
mod views;

pub use error::{ApiError, ErrorBody};
pub use routes::router;
pub use session::{cookie_jar, to_http_cookie, CurrentSession};
pub use state::AppState;
pub use views::{ChartContainer, ChartLegend, ChartTooltip, Views};
