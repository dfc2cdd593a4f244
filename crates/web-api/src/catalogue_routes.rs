use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use domain::{
    City, CityFilter, Domain, DomainInput, DomainUpdate, EstablishmentType, FilterQuery, Formation,
    FormationFilter, Level, LevelInput, LevelUpdate, Mention, PaginatedResult, PaginationParams,
    Region,
};
use serde::Deserialize;
use validator::Validate;

use crate::{error::ApiError, session::CurrentSession, state::AppState};

/// `?page=&per_page=`，缺省时取默认分页
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn params(&self) -> PaginationParams {
        PaginationParams::from_optional(self.page, self.per_page)
    }
}

type Page<T> = Result<Json<PaginatedResult<T>>, ApiError>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/levels", get(list_levels).post(create_level))
        .route("/levels/{id}", get(get_level).put(update_level).delete(delete_level))
        .route("/domains", get(list_domains).post(create_domain))
        .route("/domains/{id}", get(get_domain).put(update_domain).delete(delete_domain))
        .route("/establishment-types", get(list_establishment_types))
        .route("/cities", get(list_cities))
        .route("/cities/filter", get(filter_cities))
        .route("/regions", get(list_regions))
        .route("/mentions", get(list_mentions))
        .route("/formations", get(list_formations))
        .route("/formations/filter", get(filter_formations))
}

async fn list_levels(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<Level> {
    let page = state
        .container
        .get_levels
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn get_level(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<Json<Level>, ApiError> {
    let level = state
        .container
        .get_level
        .handle(session.access_token(), id)
        .await?;
    Ok(Json(level))
}

async fn create_level(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(payload): Json<LevelInput>,
) -> Result<(StatusCode, Json<Level>), ApiError> {
    payload.validate()?;
    let level = state
        .container
        .create_level
        .handle(session.access_token(), payload)
        .await?;
    Ok((StatusCode::CREATED, Json(level)))
}

async fn update_level(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<LevelUpdate>,
) -> Result<Json<Level>, ApiError> {
    payload.validate()?;
    let level = state
        .container
        .update_level
        .handle(session.access_token(), (id, payload))
        .await?;
    Ok(Json(level))
}

async fn delete_level(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .container
        .delete_level
        .handle(session.access_token(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_domains(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<Domain> {
    let page = state
        .container
        .get_domains
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn get_domain(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<Json<Domain>, ApiError> {
    let domain = state
        .container
        .get_domain
        .handle(session.access_token(), id)
        .await?;
    Ok(Json(domain))
}

async fn create_domain(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(payload): Json<DomainInput>,
) -> Result<(StatusCode, Json<Domain>), ApiError> {
    payload.validate()?;
    let domain = state
        .container
        .create_domain
        .handle(session.access_token(), payload)
        .await?;
    Ok((StatusCode::CREATED, Json(domain)))
}

async fn update_domain(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
    Json(payload): Json<DomainUpdate>,
) -> Result<Json<Domain>, ApiError> {
    payload.validate()?;
    let domain = state
        .container
        .update_domain
        .handle(session.access_token(), (id, payload))
        .await?;
    Ok(Json(domain))
}

async fn delete_domain(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .container
        .delete_domain
        .handle(session.access_token(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_establishment_types(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<EstablishmentType> {
    let page = state
        .container
        .get_establishment_types
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn list_cities(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<City> {
    let page = state
        .container
        .get_cities
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn filter_cities(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
    Query(filter): Query<CityFilter>,
) -> Page<City> {
    let page = state
        .container
        .filter_cities
        .handle(session.access_token(), FilterQuery::new(query.params(), filter))
        .await?;
    Ok(Json(page))
}

async fn list_regions(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<Region> {
    let page = state
        .container
        .get_regions
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn list_mentions(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<Mention> {
    let page = state
        .container
        .get_mentions
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn list_formations(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
) -> Page<Formation> {
    let page = state
        .container
        .get_formations
        .handle(session.access_token(), query.params())
        .await?;
    Ok(Json(page))
}

async fn filter_formations(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<PageQuery>,
    Query(filter): Query<FormationFilter>,
) -> Page<Formation> {
    let page = state
        .container
        .filter_formations
        .handle(session.access_token(), FilterQuery::new(query.params(), filter))
        .await?;
    Ok(Json(page))
}
