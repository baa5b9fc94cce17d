use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use nivaas::error::AppError;
use nivaas::marketplace::catalog::{
    catalog_router, format_display_price, ListingCatalogService, ListingRepository,
};
use nivaas::marketplace::finance::emi_quote;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct EmiQuoteRequest {
    pub(crate) principal: u64,
    pub(crate) annual_rate: f64,
    pub(crate) tenure_years: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmiQuoteResponse {
    pub(crate) principal: u64,
    pub(crate) annual_rate: f64,
    pub(crate) tenure_years: u32,
    pub(crate) monthly_installment: u64,
    pub(crate) monthly_installment_display: String,
    pub(crate) total_payment: u64,
    pub(crate) total_interest: u64,
}

pub(crate) fn with_catalog_routes<R>(service: Arc<ListingCatalogService<R>>) -> axum::Router
where
    R: ListingRepository + 'static,
{
    catalog_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/tools/emi", axum::routing::get(emi_quote_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn emi_quote_endpoint(
    Query(params): Query<EmiQuoteRequest>,
) -> Result<Json<EmiQuoteResponse>, AppError> {
    let EmiQuoteRequest {
        principal,
        annual_rate,
        tenure_years,
    } = params;

    let quote = emi_quote(principal, annual_rate, tenure_years)?;

    Ok(Json(EmiQuoteResponse {
        principal,
        annual_rate,
        tenure_years,
        monthly_installment: quote.monthly_installment,
        monthly_installment_display: format_display_price(quote.monthly_installment),
        total_payment: quote.total_payment,
        total_interest: quote.total_interest,
    }))
}
