//! HTTP surface of the catalog.
//!
//! Maps query strings and path segments onto catalog calls and catalog errors
//! onto status codes. Everything here is marshaling; decisions live in
//! `catalog_core`.

use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_api::{
    CatalogError, InstalledVersion, Resource, Service, ServiceQuery, ServiceTypeCode,
};
use log::{error, warn};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/services", get(get_services))
        .route("/services/:type_code", get(get_service))
        .route("/services/:type_code/versions", get(get_service_versions))
        .route(
            "/services/:type_code/versions/:version_number",
            get(get_service_version),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Query string of `GET /services`. Missing values take the catalog defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    search: String,
    sort: String,
    page: i64,
    #[serde(rename = "pageSize", alias = "page_size")]
    page_size: i64,
}

impl From<ListParams> for ServiceQuery {
    fn from(params: ListParams) -> Self {
        ServiceQuery::new()
            .with_search(params.search)
            .with_sort(params.sort.as_str())
            .with_page(params.page, params.page_size)
    }
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Catalog(CatalogError),
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Catalog(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Catalog(CatalogError::NotFound(Resource::Version { .. })) => (
                StatusCode::NOT_FOUND,
                "service version not found".to_string(),
            ),
            ApiError::Catalog(e @ CatalogError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            ApiError::Catalog(CatalogError::Backend(e)) => {
                error!("Version store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({"status": "ERROR", "msg": msg}))).into_response()
    }
}

fn parse_type_code(raw: &str) -> Result<ServiceTypeCode, ApiError> {
    raw.parse::<u32>()
        .map(ServiceTypeCode::from)
        .map_err(|_| ApiError::BadRequest("invalid type code".to_string()))
}

fn parse_version_number(raw: &str) -> Result<u32, ApiError> {
    raw.parse::<u32>()
        .map_err(|_| ApiError::BadRequest("invalid version number".to_string()))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn get_services(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let Query(params) = params.map_err(|e| {
        warn!("Rejected services query: {}", e);
        ApiError::BadRequest(e.body_text())
    })?;

    let services = state.catalog().list_services(&params.into())?;
    Ok(Json(services))
}

async fn get_service(
    State(state): State<AppState>,
    Path(type_code): Path<String>,
) -> Result<Json<Service>, ApiError> {
    let type_code = parse_type_code(&type_code)?;
    Ok(Json(state.catalog().get_service(type_code)?))
}

async fn get_service_versions(
    State(state): State<AppState>,
    Path(type_code): Path<String>,
) -> Result<Json<Vec<InstalledVersion>>, ApiError> {
    let type_code = parse_type_code(&type_code)?;
    Ok(Json(state.catalog().list_versions(type_code)?))
}

async fn get_service_version(
    State(state): State<AppState>,
    Path((type_code, version_number)): Path<(String, String)>,
) -> Result<Json<InstalledVersion>, ApiError> {
    let type_code = parse_type_code(&type_code)?;
    let version_number = parse_version_number(&version_number)?;
    Ok(Json(
        state.catalog().get_version(type_code, version_number)?,
    ))
}
