use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::{ListingId, ListingStatus};
use super::intake::ListingSubmission;
use super::repository::{ListingRepository, RepositoryError};
use super::search::SearchQuery;
use super::service::{CatalogServiceError, ListingCatalogService};

/// Router builder exposing the catalog over HTTP.
pub fn catalog_router<R>(service: Arc<ListingCatalogService<R>>) -> Router
where
    R: ListingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/properties",
            get(search_handler::<R>).post(submit_handler::<R>),
        )
        .route(
            "/api/v1/properties/:listing_id",
            get(detail_handler::<R>).delete(delist_handler::<R>),
        )
        .route(
            "/api/v1/properties/:listing_id/status",
            patch(status_handler::<R>),
        )
        .route("/api/v1/cities", get(cities_handler::<R>))
        .route("/api/v1/map/pins", get(pins_handler::<R>))
        .route("/api/v1/market/summary", get(summary_handler::<R>))
        .with_state(service)
}

/// Query-string shape of the listing page. Absent parameters take the
/// page's neutral defaults; unknown values degrade inside the pipeline
/// rather than being rejected here.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogQueryParams {
    #[serde(default)]
    search: String,
    #[serde(default = "all_param")]
    city: String,
    #[serde(default = "all_param")]
    bedrooms: String,
    #[serde(default = "all_param")]
    price_range: String,
    #[serde(default = "relevance_param")]
    sort: String,
}

fn all_param() -> String {
    "all".to_string()
}

fn relevance_param() -> String {
    "relevance".to_string()
}

impl CatalogQueryParams {
    fn to_query(&self) -> SearchQuery {
        SearchQuery::from_params(
            &self.search,
            &self.city,
            &self.bedrooms,
            &self.price_range,
            &self.sort,
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChange {
    status: ListingStatus,
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
    Query(params): Query<CatalogQueryParams>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.search(&params.to_query()) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
    axum::Json(submission): axum::Json<ListingSubmission>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.submit(&submission, Utc::now().date_naive()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(CatalogServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(CatalogServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "listing already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let id = ListingId(listing_id);
    match service.listing(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(CatalogServiceError::UnknownListing(_)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
    Path(listing_id): Path<String>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let id = ListingId(listing_id);
    match service.update_status(&id, change.status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(CatalogServiceError::UnknownListing(_)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn delist_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let id = ListingId(listing_id);
    match service.delist(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(CatalogServiceError::UnknownListing(_)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn cities_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.cities() {
        Ok(cities) => (StatusCode::OK, axum::Json(cities)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn pins_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
    Query(params): Query<CatalogQueryParams>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.map_pins(&params.to_query()) {
        Ok(pins) => (StatusCode::OK, axum::Json(pins)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<ListingCatalogService<R>>>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.market_summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => internal_error(error),
    }
}

fn not_found(id: &ListingId) -> Response {
    let payload = json!({
        "error": format!("unknown listing {:?}", id.0),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: CatalogServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
