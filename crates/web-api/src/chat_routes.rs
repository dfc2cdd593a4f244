use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use domain::{ChatHistoryResponse, ChatInput, ChatResponse};
use validator::Validate;

use crate::{error::ApiError, session::CurrentSession, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(send_message))
        .route("/chat/history", get(history))
}

async fn send_message(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(payload): Json<ChatInput>,
) -> Result<Json<ChatResponse>, ApiError> {
    payload.validate()?;
    let response = state
        .container
        .send_chat_message
        .handle(session.access_token(), payload)
        .await?;
    Ok(Json(response))
}

async fn history(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Json<ChatHistoryResponse>, ApiError> {
    let history = state
        .container
        .chat_history
        .handle(session.access_token(), ())
        .await?;
    Ok(Json(history))
}
