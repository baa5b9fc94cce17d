use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::{
    AgeBand, BhkConfiguration, DocumentCategory, Facing, FurnishingState, PropertyKind, SellerKind,
};

/// Full payload of the multi-step listing wizard, one field per step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSubmission {
    pub basic: BasicDetails,
    pub documents: Vec<DocumentDescriptor>,
    pub intent: ListingIntent,
    pub amenities: Vec<String>,
    pub location: LocationDetails,
    pub media: MediaGallery,
    pub seller: SellerProfile,
}

/// Step one of the wizard: what the property is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicDetails {
    pub title: String,
    pub kind: PropertyKind,
    pub bhk: BhkConfiguration,
    pub bathrooms: u8,
    pub super_builtup_area_sqft: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carpet_area_sqft: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Facing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_no: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<u8>,
    pub furnishing: FurnishingState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBand>,
    pub description: String,
}

/// Metadata for an uploaded document; file bytes never reach this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub category: DocumentCategory,
    pub file_name: String,
    pub size_bytes: u64,
}

/// How the seller wants to transact, with the terms for that route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ListingIntent {
    Sale(SaleTerms),
    UrgentSale(SaleTerms),
    Rent(RentTerms),
}

impl ListingIntent {
    pub fn is_urgent(&self) -> bool {
        matches!(self, ListingIntent::UrgentSale(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTerms {
    pub expected_price: u64,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction: Option<AuctionWindow>,
}

/// Optional urgent-sale auction: a reserve price and a closing date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionWindow {
    pub floor_price: u64,
    pub closes_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentTerms {
    pub monthly_rent: u32,
    pub security_deposit: u32,
    pub available_from: NaiveDate,
}

/// Postal address split the way the wizard collects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub address: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

/// Photo and video metadata held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaGallery {
    pub photos: Vec<MediaAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_tour: Option<MediaAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Who is listing the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub name: String,
    pub kind: SellerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
