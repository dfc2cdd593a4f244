//! 院校路由
//!
//! 筛选结果按 `(访问令牌, 查询串)` 缓存在 `/establishments` 路径下，
//! 提交新筛选条件的表单动作会使该路径的缓存失效并 303 跳转。
//! 新建、修改、删除和评分成功后同样使该路径失效。

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use domain::{
    Establishment, EstablishmentFilter, EstablishmentInput, EstablishmentUpdate, FilterQuery,
    Rating,
};
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;
use validator::Validate;

use application::ESTABLISHMENTS_PATH;

use crate::{
    catalogue_routes::PageQuery, error::ApiError, session::CurrentSession, state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/establishments", post(create_establishment))
        .route("/establishments/filter", get(filter_establishments))
        .route(
            "/establishments/{id}",
            get(get_establishment)
                .put(update_establishment)
                .delete(delete_establishment),
        )
        .route("/establishments/{id}/rate", post(rate_establishment))
}

fn cache_key(token: &str, query: &FilterQuery<EstablishmentFilter>) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.query_pairs())
        .finish();
    format!("{}?{}", token, query)
}

/// 先查缓存，未命中时调用上游并写回；未登录的请求不缓存。
/// 代数在调用上游之前读取，期间路径被失效时结果不写回。
async fn cached_establishments(
    state: &AppState,
    session: &CurrentSession,
    query: FilterQuery<EstablishmentFilter>,
) -> Result<Value, ApiError> {
    let key = session
        .access_token()
        .map(|token| cache_key(&token, &query));

    if let Some(key) = &key {
        if let Some(hit) = state.query_cache.get(ESTABLISHMENTS_PATH, key).await {
            return Ok(hit);
        }
    }
    let generation = state.query_cache.generation(ESTABLISHMENTS_PATH).await;

    let page = state
        .container
        .filter_establishments
        .handle(session.access_token(), query)
        .await?;
    let value = serde_json::to_value(&page)
        .map_err(|e| ApiError::internal_server_error(format!("serialize establishments: {}", e)))?;

    if let Some(key) = key {
        let stored = state
            .query_cache
            .insert(ESTABLISHMENTS_PATH, &key, value.clone(), generation)
            .await;
        debug!(stored, "establishment page fetched");
    }
    Ok(value)
}

async fn filter_establishments(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(page): Query<PageQuery>,
    axum_extra::extract::Query(filter): axum_extra::extract::Query<EstablishmentFilter>,
) -> Result<Json<Value>, ApiError> {
    let query = FilterQuery::new(page.params(), filter);
    Ok(Json(cached_establishments(&state, &session, query).await?))
}

async fn get_establishment(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<Json<Establishment>, ApiError> {
    let establishment = state
        .container
        .get_establishment
        .handle(session.access_token(), id)
        .await?;
    Ok(Json(establishment))
}

async fn create_establishment(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(payload): Json<EstablishmentInput>,
) -> Result<(StatusCode, Json<Establishment>), ApiError> {
    payload.validate()?;
    let establishment = state
        .container
        .create_establishment
        .handle(session.access_token(), payload)
        .await?;
    state.query_cache.invalidate_path(ESTABLISHMENTS_PATH).await;
    Ok((StatusCode::CREATED, Json(establishment)))
}

async fn update_establishment(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<EstablishmentUpdate>,
) -> Result<Json<Establishment>, ApiError> {
    payload.validate()?;
    let establishment = state
        .container
        .update_establishment
        .handle(session.access_token(), (id, payload))
        .await?;
    state.query_cache.invalidate_path(ESTABLISHMENTS_PATH).await;
    Ok(Json(establishment))
}

async fn delete_establishment(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .container
        .delete_establishment
        .handle(session.access_token(), id)
        .await?;
    state.query_cache.invalidate_path(ESTABLISHMENTS_PATH).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn rate_establishment(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<Rating>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;
    state
        .container
        .rate_establishment
        .handle(session.access_token(), (id, payload))
        .await?;
    state.query_cache.invalidate_path(ESTABLISHMENTS_PATH).await;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /establishments`，当前筛选条件下的列表页
pub async fn establishments_page(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(page): Query<PageQuery>,
    axum_extra::extract::Query(filter): axum_extra::extract::Query<EstablishmentFilter>,
) -> Result<Html<String>, ApiError> {
    let query = FilterQuery::new(page.params(), filter.clone());
    let results = cached_establishments(&state, &session, query).await?;

    let html = state
        .views
        .establishments_page(&results, &filter)
        .map_err(|e| ApiError::internal_server_error(format!("render establishments: {}", e)))?;
    Ok(Html(html))
}

/// `POST /establishments/filters`，表单字段原样成为新的查询串
pub async fn update_filters(
    State(state): State<AppState>,
    Form(params): Form<Vec<(String, String)>>,
) -> Result<Redirect, ApiError> {
    let location = state.container.update_filters.execute(&params).await?;
    Ok(Redirect::to(&location))
}
