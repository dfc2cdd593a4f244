use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use domain::{Credentials, OtpCredentials, OtpRequest, OtpRequested, User};
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use application::SessionGrant;

use crate::{
    error::ApiError,
    session::{cookie_jar, CurrentSession},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct SignedIn {
    pub user: User,
}

/// 无需会话即可访问的认证路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/otp/request", post(request_otp))
        .route("/otp/sign-in", post(sign_in_otp))
        .route("/refresh", post(refresh))
}

fn signed_in(grant: SessionGrant) -> (CookieJar, Json<SignedIn>) {
    let SessionGrant { user, cookies } = grant;
    (cookie_jar(cookies), Json(SignedIn { user }))
}

async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    payload.validate()?;
    let user = state.container.sign_up.handle(payload).await?;
    info!(user_id = user.id, "account created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<(CookieJar, Json<SignedIn>), ApiError> {
    payload.validate()?;
    let grant = state.container.sign_in.handle(payload).await?;
    info!(user_id = grant.user.id, "signed in");
    Ok(signed_in(grant))
}

async fn request_otp(
    State(state): State<AppState>,
    Json(payload): Json<OtpRequest>,
) -> Result<Json<OtpRequested>, ApiError> {
    payload.validate()?;
    let requested = state.container.request_otp.handle(payload).await?;
    Ok(Json(requested))
}

async fn sign_in_otp(
    State(state): State<AppState>,
    Json(payload): Json<OtpCredentials>,
) -> Result<(CookieJar, Json<SignedIn>), ApiError> {
    payload.validate()?;
    let grant = state.container.sign_in_otp.handle(payload).await?;
    info!(user_id = grant.user.id, "signed in with one-time code");
    Ok(signed_in(grant))
}

async fn refresh(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<(CookieJar, Json<SignedIn>), ApiError> {
    let grant = state
        .container
        .refresh_token
        .handle(session.refresh_token())
        .await?;
    Ok(signed_in(grant))
}

/// 无论上游是否成功都会清除会话 Cookie
pub async fn sign_out(State(state): State<AppState>, session: CurrentSession) -> Response {
    let cleared = cookie_jar(state.container.cookie_service.expired_session_cookies());
    let result = state
        .container
        .sign_out
        .handle(session.access_token(), session.refresh_token())
        .await;

    match result {
        Ok(message) => (cleared, Json(message)).into_response(),
        Err(err) => {
            warn!(error = %err, "upstream sign-out failed");
            (cleared, ApiError::from(err)).into_response()
        }
    }
}

pub async fn me(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Json<User>, ApiError> {
    let user = state
        .container
        .current_user
        .handle(session.access_token(), ())
        .await?;
    Ok(Json(user))
}
