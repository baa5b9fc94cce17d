//! Property catalog workflow: the listing domain model, the search and
//! pricing pipeline behind the listing page, seller intake, map pins, and
//! the HTTP surface that exposes them.

pub mod domain;
pub(crate) mod geo;
pub mod intake;
pub mod price;
pub mod report;
pub mod repository;
pub mod router;
pub mod search;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AgeBand, BhkConfiguration, DocumentCategory, Facing, FurnishingState, ListingId,
    ListingStatus, PropertyKind, PropertyRecord, SellerCard, SellerKind, TrustGrade,
};
pub use geo::{map_pins, MapPin};
pub use intake::{
    AuctionWindow, BasicDetails, DocumentDescriptor, IntakeError, IntakePolicy, ListingIntent,
    ListingSubmission, LocationDetails, MediaAsset, MediaGallery, RentTerms, SaleTerms,
    SellerProfile, SubmissionGuard,
};
pub use price::{format_display_price, representative_rupees};
pub use report::views::MarketSummary;
pub use report::MarketReport;
pub use repository::{ListingRepository, RepositoryError};
pub use router::catalog_router;
pub use search::{
    extract_cities, filter_and_sort, BedroomFilter, CityFilter, PriceBand, PriceBandFilter,
    SearchQuery, SortOrder,
};
pub use seed::sample_catalog;
pub use service::{CatalogPage, CatalogServiceError, ListingCatalogService};
