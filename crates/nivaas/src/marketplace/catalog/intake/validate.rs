use std::collections::HashSet;

use chrono::NaiveDate;

use super::super::domain::{
    DocumentCategory, ListingId, ListingStatus, PropertyRecord, SellerCard,
};
use super::super::price::{format_display_price, group_inr};
use super::domain::{
    BasicDetails, DocumentDescriptor, ListingIntent, ListingSubmission, LocationDetails,
    MediaGallery, SellerProfile,
};

/// Validation errors raised by the submission guard. The first violated
/// step wins; later steps are not inspected.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("listing title is required")]
    MissingTitle,
    #[error("listing description is required")]
    MissingDescription,
    #[error("built-up area must be a positive number of square feet")]
    InvalidArea,
    #[error("carpet area cannot exceed the super built-up area")]
    CarpetAreaExceedsBuiltup,
    #[error("floor {floor} is above the building's {total_floors} floors")]
    FloorAboveTotal { floor: u8, total_floors: u8 },
    #[error("documents must span at least {required} categories, found {provided}")]
    InsufficientDocumentCategories { required: usize, provided: usize },
    #[error("expected price must be a positive rupee amount")]
    InvalidPrice,
    #[error("monthly rent must be a positive rupee amount")]
    InvalidRent,
    #[error("auction floor price exceeds the expected price")]
    AuctionFloorAbovePrice,
    #[error("auction window closed on {closes_on}, today is {today}")]
    AuctionWindowClosed {
        closes_on: NaiveDate,
        today: NaiveDate,
    },
    #[error("location field {0:?} is required")]
    MissingLocationField(&'static str),
    #[error("pincode must be exactly six digits, got {0:?}")]
    InvalidPincode(String),
    #[error("at least {required} photo(s) required, found {provided}")]
    InsufficientPhotos { required: usize, provided: usize },
    #[error("unsupported media type {content_type:?} for {file_name:?}")]
    UnsupportedMediaType {
        file_name: String,
        content_type: String,
    },
    #[error("seller name is required")]
    MissingSellerName,
}

const DEFAULT_MIN_DOCUMENT_CATEGORIES: usize = 3;
const DEFAULT_MIN_PHOTOS: usize = 1;

/// Policy dials backing intake validation.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    min_document_categories: usize,
    min_photos: usize,
}

impl IntakePolicy {
    pub fn new(min_document_categories: usize, min_photos: usize) -> Self {
        let category_count = DocumentCategory::ordered().len();
        let min_document_categories = if (1..=category_count).contains(&min_document_categories) {
            min_document_categories
        } else {
            DEFAULT_MIN_DOCUMENT_CATEGORIES
        };
        let min_photos = if min_photos >= 1 {
            min_photos
        } else {
            DEFAULT_MIN_PHOTOS
        };

        Self {
            min_document_categories,
            min_photos,
        }
    }

    pub fn min_document_categories(&self) -> usize {
        self.min_document_categories
    }

    pub fn min_photos(&self) -> usize {
        self.min_photos
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DOCUMENT_CATEGORIES, DEFAULT_MIN_PHOTOS)
    }
}

/// Guard responsible for turning wizard submissions into catalog records.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    policy: IntakePolicy,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::with_policy(IntakePolicy::default())
    }
}

impl SubmissionGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Validate every wizard step, then compose the catalog record the
    /// listing will be published as. New records come in unverified and
    /// available, dated `today`.
    pub fn listing_from_submission(
        &self,
        submission: &ListingSubmission,
        id: ListingId,
        today: NaiveDate,
    ) -> Result<PropertyRecord, IntakeError> {
        self.check_basic(&submission.basic)?;
        self.check_documents(&submission.documents)?;
        self.check_intent(&submission.intent, today)?;
        self.check_location(&submission.location)?;
        self.check_media(&submission.media)?;
        self.check_seller(&submission.seller)?;

        Ok(compose_record(submission, id, today))
    }

    fn check_basic(&self, basic: &BasicDetails) -> Result<(), IntakeError> {
        if basic.title.trim().is_empty() {
            return Err(IntakeError::MissingTitle);
        }
        if basic.description.trim().is_empty() {
            return Err(IntakeError::MissingDescription);
        }
        if basic.super_builtup_area_sqft == 0 {
            return Err(IntakeError::InvalidArea);
        }
        if let Some(carpet) = basic.carpet_area_sqft {
            if carpet == 0 {
                return Err(IntakeError::InvalidArea);
            }
            if carpet > basic.super_builtup_area_sqft {
                return Err(IntakeError::CarpetAreaExceedsBuiltup);
            }
        }
        if let (Some(floor), Some(total_floors)) = (basic.floor_no, basic.total_floors) {
            if floor > total_floors {
                return Err(IntakeError::FloorAboveTotal {
                    floor,
                    total_floors,
                });
            }
        }

        Ok(())
    }

    fn check_documents(&self, documents: &[DocumentDescriptor]) -> Result<(), IntakeError> {
        let provided = documents
            .iter()
            .map(|document| document.category)
            .collect::<HashSet<_>>()
            .len();
        let required = self.policy.min_document_categories();
        if provided < required {
            return Err(IntakeError::InsufficientDocumentCategories { required, provided });
        }

        Ok(())
    }

    fn check_intent(&self, intent: &ListingIntent, today: NaiveDate) -> Result<(), IntakeError> {
        match intent {
            ListingIntent::Sale(terms) | ListingIntent::UrgentSale(terms) => {
                if terms.expected_price == 0 {
                    return Err(IntakeError::InvalidPrice);
                }
                if let Some(auction) = &terms.auction {
                    if auction.floor_price > terms.expected_price {
                        return Err(IntakeError::AuctionFloorAbovePrice);
                    }
                    if auction.closes_on <= today {
                        return Err(IntakeError::AuctionWindowClosed {
                            closes_on: auction.closes_on,
                            today,
                        });
                    }
                }
            }
            ListingIntent::Rent(terms) => {
                if terms.monthly_rent == 0 {
                    return Err(IntakeError::InvalidRent);
                }
            }
        }

        Ok(())
    }

    fn check_location(&self, location: &LocationDetails) -> Result<(), IntakeError> {
        for (field, value) in [
            ("address", &location.address),
            ("locality", &location.locality),
            ("city", &location.city),
            ("state", &location.state),
        ] {
            if value.trim().is_empty() {
                return Err(IntakeError::MissingLocationField(field));
            }
        }

        let pincode = location.pincode.trim();
        if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IntakeError::InvalidPincode(location.pincode.clone()));
        }

        Ok(())
    }

    fn check_media(&self, media: &MediaGallery) -> Result<(), IntakeError> {
        let required = self.policy.min_photos();
        if media.photos.len() < required {
            return Err(IntakeError::InsufficientPhotos {
                required,
                provided: media.photos.len(),
            });
        }
        for photo in &media.photos {
            if !photo.content_type.starts_with("image/") {
                return Err(IntakeError::UnsupportedMediaType {
                    file_name: photo.file_name.clone(),
                    content_type: photo.content_type.clone(),
                });
            }
        }
        if let Some(video) = &media.video_tour {
            if !video.content_type.starts_with("video/") {
                return Err(IntakeError::UnsupportedMediaType {
                    file_name: video.file_name.clone(),
                    content_type: video.content_type.clone(),
                });
            }
        }

        Ok(())
    }

    fn check_seller(&self, seller: &SellerProfile) -> Result<(), IntakeError> {
        if seller.name.trim().is_empty() {
            return Err(IntakeError::MissingSellerName);
        }

        Ok(())
    }
}

fn compose_record(submission: &ListingSubmission, id: ListingId, today: NaiveDate) -> PropertyRecord {
    let basic = &submission.basic;

    PropertyRecord {
        id,
        title: basic.title.trim().to_string(),
        price: price_display(&submission.intent),
        location: format!(
            "{}, {}",
            submission.location.locality.trim(),
            submission.location.city.trim()
        ),
        beds: basic.bhk.bedroom_count(),
        baths: basic.bathrooms,
        area: format!("{} sq ft", group_inr(u64::from(basic.super_builtup_area_sqft))),
        kind: basic.kind,
        furnishing: basic.furnishing,
        facing: basic.facing,
        age: basic.age,
        status: ListingStatus::Available,
        verified: false,
        urgent: submission.intent.is_urgent(),
        trust_grade: None,
        rera_id: None,
        description: basic.description.trim().to_string(),
        amenities: submission.amenities.clone(),
        seller: SellerCard {
            name: submission.seller.name.trim().to_string(),
            kind: submission.seller.kind,
        },
        listed_on: today,
    }
}

// Sale prices round-trip through the display notation the search pipeline
// parses; rents deliberately do not carry a L/Cr token.
fn price_display(intent: &ListingIntent) -> String {
    match intent {
        ListingIntent::Sale(terms) | ListingIntent::UrgentSale(terms) => {
            format_display_price(terms.expected_price)
        }
        ListingIntent::Rent(terms) => {
            format!("₹{}/month", group_inr(u64::from(terms.monthly_rent)))
        }
    }
}
