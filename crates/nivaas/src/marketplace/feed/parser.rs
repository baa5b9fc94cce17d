use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::marketplace::catalog::{
    FurnishingState, ListingId, ListingStatus, PropertyKind, PropertyRecord, SellerCard,
    SellerKind, TrustGrade,
};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<FeedRow>() {
        if let Some(record) = row?.into_record() {
            records.push(record);
        }
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct FeedRow {
    #[serde(rename = "ID", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(rename = "Price", default)]
    price: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Beds", default, deserialize_with = "empty_string_as_none")]
    beds: Option<String>,
    #[serde(rename = "Baths", default, deserialize_with = "empty_string_as_none")]
    baths: Option<String>,
    #[serde(rename = "Area", default)]
    area: String,
    #[serde(rename = "Type", default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(rename = "Furnishing", default, deserialize_with = "empty_string_as_none")]
    furnishing: Option<String>,
    #[serde(rename = "Verified", default, deserialize_with = "empty_string_as_none")]
    verified: Option<String>,
    #[serde(rename = "Urgent", default, deserialize_with = "empty_string_as_none")]
    urgent: Option<String>,
    #[serde(rename = "Listed On", default, deserialize_with = "empty_string_as_none")]
    listed_on: Option<String>,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Amenities", default)]
    amenities: String,
    #[serde(rename = "RERA", default, deserialize_with = "empty_string_as_none")]
    rera_id: Option<String>,
    #[serde(rename = "Seller", default, deserialize_with = "empty_string_as_none")]
    seller: Option<String>,
    #[serde(rename = "Seller Type", default, deserialize_with = "empty_string_as_none")]
    seller_kind: Option<String>,
    #[serde(rename = "Trust Grade", default, deserialize_with = "empty_string_as_none")]
    trust_grade: Option<String>,
}

impl FeedRow {
    // Rows without an id or a title are export noise, not listings.
    fn into_record(self) -> Option<PropertyRecord> {
        let id = self.id?;
        let title = self.title?;

        Some(PropertyRecord {
            id: ListingId(id),
            title,
            price: self.price,
            location: self.location,
            beds: parse_count(self.beds.as_deref()),
            baths: parse_count(self.baths.as_deref()),
            area: self.area,
            kind: self
                .kind
                .as_deref()
                .and_then(PropertyKind::from_label)
                .unwrap_or(PropertyKind::Apartment),
            furnishing: self
                .furnishing
                .as_deref()
                .and_then(FurnishingState::from_label)
                .unwrap_or(FurnishingState::Unfurnished),
            facing: None,
            age: None,
            status: ListingStatus::Available,
            verified: parse_flag(self.verified.as_deref()),
            urgent: parse_flag(self.urgent.as_deref()),
            trust_grade: self.trust_grade.as_deref().and_then(TrustGrade::from_label),
            rera_id: self.rera_id,
            description: self.description,
            amenities: split_amenities(&self.amenities),
            seller: SellerCard {
                name: self
                    .seller
                    .unwrap_or_else(|| "Private Seller".to_string()),
                kind: self
                    .seller_kind
                    .as_deref()
                    .and_then(SellerKind::from_label)
                    .unwrap_or(SellerKind::Owner),
            },
            listed_on: self
                .listed_on
                .as_deref()
                .and_then(parse_listed_on)
                .unwrap_or_default(),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_count(value: Option<&str>) -> u8 {
    value.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        None => false,
    }
}

fn split_amenities(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|amenity| !amenity.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_listed_on(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_listed_on_for_tests(value: &str) -> Option<NaiveDate> {
    parse_listed_on(value)
}
