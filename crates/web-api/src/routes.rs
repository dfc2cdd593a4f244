use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use domain::User;
use serde::Serialize;

use crate::{
    auth_routes, catalogue_routes, chat_routes, establishment_routes, users_routes,
    session::{refresh_session, CurrentSession},
    state::AppState,
};

#[derive(Debug, Serialize)]
struct SessionResponse {
    is_logged_in: bool,
    user: Option<User>,
}

pub fn router(state: AppState) -> Router {
    // 需要会话的路由，访问令牌过期时先由中间件刷新
    let session_routes = Router::new()
        .route("/establishments", get(establishment_routes::establishments_page))
        .route("/establishments/filters", post(establishment_routes::update_filters))
        .nest("/api", api_routes())
        .layer(middleware::from_fn_with_state(state.clone(), refresh_session));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::routes())
        .merge(session_routes)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(current_session))
        .route("/auth/me", get(auth_routes::me))
        .route("/auth/sign-out", post(auth_routes::sign_out))
        .merge(chat_routes::routes())
        .merge(catalogue_routes::routes())
        .merge(establishment_routes::routes())
        .merge(users_routes::routes())
}

async fn health() -> &'static str {
    "ok"
}

async fn current_session(session: CurrentSession) -> Json<SessionResponse> {
    let session = session.into_inner();
    Json(SessionResponse {
        is_logged_in: session.is_logged_in(),
        user: session.user,
    })
}
