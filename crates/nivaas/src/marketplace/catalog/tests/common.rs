use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::marketplace::catalog::domain::{
    AgeBand, BhkConfiguration, DocumentCategory, Facing, FurnishingState, ListingId, PropertyKind,
    PropertyRecord, SellerKind,
};
use crate::marketplace::catalog::intake::{
    BasicDetails, DocumentDescriptor, ListingIntent, ListingSubmission, LocationDetails,
    MediaAsset, MediaGallery, RentTerms, SaleTerms, SellerProfile,
};
use crate::marketplace::catalog::repository::{ListingRepository, RepositoryError};
use crate::marketplace::catalog::seed::sample_catalog;
use crate::marketplace::catalog::{catalog_router, ListingCatalogService, SubmissionGuard};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 8, 20)
}

pub(super) fn document(category: DocumentCategory, file_name: &str) -> DocumentDescriptor {
    DocumentDescriptor {
        category,
        file_name: file_name.to_string(),
        size_bytes: 240_000,
    }
}

pub(super) fn photo(file_name: &str) -> MediaAsset {
    MediaAsset {
        file_name: file_name.to_string(),
        content_type: "image/jpeg".to_string(),
        size_bytes: 512_000,
    }
}

/// A complete, valid sale submission. Tests mutate single fields to probe
/// individual guard checks.
pub(super) fn submission() -> ListingSubmission {
    ListingSubmission {
        basic: BasicDetails {
            title: "Embassy Springs Lakefront".to_string(),
            kind: PropertyKind::Apartment,
            bhk: BhkConfiguration::ThreeBhk,
            bathrooms: 3,
            super_builtup_area_sqft: 1850,
            carpet_area_sqft: Some(1480),
            facing: Some(Facing::East),
            floor_no: Some(7),
            total_floors: Some(14),
            furnishing: FurnishingState::SemiFurnished,
            age: Some(AgeBand::OneToFiveYears),
            description: "Lake-facing corner unit with a private deck.".to_string(),
        },
        documents: vec![
            document(DocumentCategory::OwnershipDocuments, "sale-deed.pdf"),
            document(DocumentCategory::TaxReceipts, "property-tax-2024.pdf"),
            document(DocumentCategory::FloorPlans, "tower-4-floor-plan.pdf"),
        ],
        intent: ListingIntent::Sale(SaleTerms {
            expected_price: 9_200_000,
            negotiable: true,
            auction: None,
        }),
        amenities: vec!["Clubhouse".to_string(), "Piped Gas".to_string()],
        location: LocationDetails {
            address: "Tower 4, Embassy Springs".to_string(),
            locality: "Devanahalli".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            pincode: "562110".to_string(),
            landmark: Some("Near the airport trumpet flyover".to_string()),
        },
        media: MediaGallery {
            photos: vec![photo("living-room.jpg")],
            video_tour: None,
        },
        seller: SellerProfile {
            name: "Ananya Rao".to_string(),
            kind: SellerKind::Owner,
            phone: Some("+91 98450 12345".to_string()),
        },
    }
}

pub(super) fn rent_submission() -> ListingSubmission {
    let mut submission = submission();
    submission.intent = ListingIntent::Rent(RentTerms {
        monthly_rent: 42_000,
        security_deposit: 200_000,
        available_from: date(2025, 9, 1),
    });
    submission
}

pub(super) fn urgent_submission() -> ListingSubmission {
    let mut submission = submission();
    submission.intent = ListingIntent::UrgentSale(SaleTerms {
        expected_price: 8_800_000,
        negotiable: false,
        auction: None,
    });
    submission
}

/// A seed record with its id and display price overridden, for sort tests
/// that need controlled inputs.
pub(super) fn priced_record(id: &str, price: &str) -> PropertyRecord {
    let mut record = sample_catalog()
        .into_iter()
        .next()
        .expect("seed catalog is never empty");
    record.id = ListingId(id.to_string());
    record.price = price.to_string();
    record
}

pub(super) fn build_service() -> (
    ListingCatalogService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::with_records(sample_catalog()));
    let service = ListingCatalogService::new(SubmissionGuard::default(), repository.clone())
        .expect("service over memory repository");
    (service, repository)
}

pub(super) fn catalog_router_with_service(
    service: ListingCatalogService<MemoryRepository>,
) -> axum::Router {
    catalog_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Insertion-ordered in-memory repository double.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<PropertyRecord>>>,
}

impl MemoryRepository {
    pub(super) fn with_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl ListingRepository for MemoryRepository {
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

/// Every write collides; the empty snapshot keeps service construction
/// working.
pub(super) struct ConflictRepository;

impl ListingRepository for ConflictRepository {
    fn insert(&self, _record: PropertyRecord) -> Result<PropertyRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: PropertyRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn remove(&self, _id: &ListingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ListingId) -> Result<Option<PropertyRecord>, RepositoryError> {
        Ok(None)
    }

    fn snapshot(&self) -> Result<Vec<PropertyRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Fails every per-record operation; the empty snapshot keeps service
/// construction working so handlers can be exercised against a broken
/// store.
pub(super) struct UnavailableRepository;

impl ListingRepository for UnavailableRepository {
    fn insert(&self, _record: PropertyRecord) -> Result<PropertyRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: PropertyRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &ListingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ListingId) -> Result<Option<PropertyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn snapshot(&self) -> Result<Vec<PropertyRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}
