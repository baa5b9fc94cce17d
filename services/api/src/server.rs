use crate::cli::ServeArgs;
use crate::infra::{load_catalog_records, AppState, InMemoryListingRepository};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nivaas::config::AppConfig;
use nivaas::error::AppError;
use nivaas::marketplace::catalog::{ListingCatalogService, SubmissionGuard};
use nivaas::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(feed_csv) = args.feed_csv.take() {
        config.catalog.feed_csv = Some(feed_csv);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (records, imported) = load_catalog_records(config.catalog.feed_csv.clone())?;
    let listings = records.len();
    let repository = Arc::new(InMemoryListingRepository::from_records(records));
    let catalog_service = Arc::new(ListingCatalogService::new(
        SubmissionGuard::default(),
        repository,
    )?);

    let app = with_catalog_routes(catalog_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    let data_source = if imported { "feed export" } else { "sample catalog" };
    info!(?config.environment, %addr, listings, data_source, "nivaas marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
