use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use domain::User;
use serde::Deserialize;
use validator::Validate;

use crate::{error::ApiError, session::CurrentSession, state::AppState};

#[derive(Debug, Deserialize, Validate)]
struct EmailQuery {
    #[validate(email)]
    email: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/by-email", get(get_user_by_email))
        .route("/users/{id}", get(get_user_by_id))
}

async fn get_user_by_email(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<EmailQuery>,
) -> Result<Json<User>, ApiError> {
    query.validate()?;
    let user = state
        .container
        .get_user_by_email
        .handle(session.access_token(), query.email)
        .await?;
    Ok(Json(user))
}

async fn get_user_by_id(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .container
        .get_user_by_id
        .handle(session.access_token(), id)
        .await?;
    Ok(Json(user))
}
