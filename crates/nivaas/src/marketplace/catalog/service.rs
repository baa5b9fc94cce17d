use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{ListingId, ListingStatus, PropertyRecord};
use super::geo::{map_pins, MapPin};
use super::intake::{IntakeError, ListingSubmission, SubmissionGuard};
use super::report::views::MarketSummary;
use super::report::MarketReport;
use super::repository::{ListingRepository, RepositoryError};
use super::search::{extract_cities, filter_and_sort, SearchQuery};

/// One page of search results plus the match count the listing page shows.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub count: usize,
    pub properties: Vec<PropertyRecord>,
}

/// Service composing the submission guard and the listing repository.
///
/// Listing ids continue the decimal sequence already present in the
/// repository, so records submitted at runtime sort as newest.
pub struct ListingCatalogService<R> {
    guard: SubmissionGuard,
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> ListingCatalogService<R>
where
    R: ListingRepository + 'static,
{
    pub fn new(guard: SubmissionGuard, repository: Arc<R>) -> Result<Self, CatalogServiceError> {
        let highest = repository
            .snapshot()?
            .iter()
            .filter_map(|record| record.id.0.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Ok(Self {
            guard,
            repository,
            sequence: AtomicU64::new(highest + 1),
        })
    }

    /// Run the filter-sort pipeline over the current catalog snapshot.
    pub fn search(&self, query: &SearchQuery) -> Result<CatalogPage, CatalogServiceError> {
        let snapshot = self.repository.snapshot()?;
        let properties = filter_and_sort(&snapshot, query);

        Ok(CatalogPage {
            count: properties.len(),
            properties,
        })
    }

    pub fn listing(&self, id: &ListingId) -> Result<PropertyRecord, CatalogServiceError> {
        self.repository
            .fetch(id)?
            .ok_or_else(|| CatalogServiceError::UnknownListing(id.0.clone()))
    }

    /// Distinct city options for the listing page dropdown.
    pub fn cities(&self) -> Result<Vec<String>, CatalogServiceError> {
        Ok(extract_cities(&self.repository.snapshot()?))
    }

    /// Map pins for whatever the same query would return as search results.
    pub fn map_pins(&self, query: &SearchQuery) -> Result<Vec<MapPin>, CatalogServiceError> {
        let page = self.search(query)?;
        Ok(map_pins(&page.properties))
    }

    pub fn market_summary(&self) -> Result<MarketSummary, CatalogServiceError> {
        let snapshot = self.repository.snapshot()?;
        Ok(MarketReport::from_records(&snapshot).summary())
    }

    /// Validate a wizard submission and publish it under the next id.
    pub fn submit(
        &self,
        submission: &ListingSubmission,
        today: NaiveDate,
    ) -> Result<PropertyRecord, CatalogServiceError> {
        let mut record = self.guard.listing_from_submission(
            submission,
            ListingId("pending".to_string()),
            today,
        )?;
        record.id = self.next_listing_id();

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    pub fn update_status(
        &self,
        id: &ListingId,
        status: ListingStatus,
    ) -> Result<PropertyRecord, CatalogServiceError> {
        let mut record = self.listing(id)?;
        record.status = status;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    pub fn delist(&self, id: &ListingId) -> Result<(), CatalogServiceError> {
        match self.repository.remove(id) {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => {
                Err(CatalogServiceError::UnknownListing(id.0.clone()))
            }
            Err(other) => Err(other.into()),
        }
    }

    fn next_listing_id(&self) -> ListingId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ListingId(id.to_string())
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("unknown listing {0:?}")]
    UnknownListing(String),
}
