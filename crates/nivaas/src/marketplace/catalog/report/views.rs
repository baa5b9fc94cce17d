use serde::Serialize;

use super::super::domain::ListingStatus;

#[derive(Debug, Clone, Serialize)]
pub struct StatusMixEntry {
    pub status: ListingStatus,
    pub status_label: &'static str,
    pub listings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityCountEntry {
    pub city: String,
    pub listings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BedroomMixEntry {
    pub beds: u8,
    pub listings: usize,
}

/// Rupee spread over the listings whose display price parses.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSpread {
    pub min_rupees: u64,
    pub max_rupees: u64,
    pub mean_rupees: u64,
    pub min_display: String,
    pub max_display: String,
    pub mean_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    pub total_listings: usize,
    pub verified_listings: usize,
    pub urgent_listings: usize,
    pub status_mix: Vec<StatusMixEntry>,
    pub city_counts: Vec<CityCountEntry>,
    pub bedroom_mix: Vec<BedroomMixEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_spread: Option<PriceSpread>,
    pub unpriced_listings: usize,
}
