use metrics_exporter_prometheus::PrometheusHandle;
use nivaas::error::AppError;
use nivaas::marketplace::catalog::{
    sample_catalog, ListingId, ListingRepository, PropertyRecord, RepositoryError,
};
use nivaas::marketplace::feed::CatalogFeedImporter;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog storage for a single process. Backed by a Vec rather than a map
/// because the snapshot order is the catalog's listing order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryListingRepository {
    records: Arc<Mutex<Vec<PropertyRecord>>>,
}

impl InMemoryListingRepository {
    pub(crate) fn from_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl ListingRepository for InMemoryListingRepository {
    fn insert(&self, record: PropertyRecord) -> Result<PropertyRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: PropertyRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn remove(&self, id: &ListingId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter().position(|existing| existing.id == *id) {
            Some(index) => {
                guard.remove(index);
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ListingId) -> Result<Option<PropertyRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| existing.id == *id).cloned())
    }

    fn snapshot(&self) -> Result<Vec<PropertyRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}

/// Boot-time catalog source: a portal CSV export when one is configured,
/// otherwise the built-in sample catalog. The flag reports which one won.
pub(crate) fn load_catalog_records(
    feed_csv: Option<PathBuf>,
) -> Result<(Vec<PropertyRecord>, bool), AppError> {
    match feed_csv {
        Some(path) => CatalogFeedImporter::from_path(path)
            .map(|records| (records, true))
            .map_err(AppError::from),
        None => Ok((sample_catalog(), false)),
    }
}
