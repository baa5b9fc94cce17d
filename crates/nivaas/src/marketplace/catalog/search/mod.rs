mod query;

pub use query::{BedroomFilter, CityFilter, PriceBand, PriceBandFilter, SearchQuery, SortOrder};

use std::cmp::Reverse;
use std::collections::HashSet;

use super::domain::PropertyRecord;
use super::price::representative_rupees;

/// Applies every active filter, then the requested ordering, and returns a
/// fresh vector. The input is never reordered, relevance keeps catalog
/// order, and listings with equal sort keys stay in catalog order.
pub fn filter_and_sort(records: &[PropertyRecord], query: &SearchQuery) -> Vec<PropertyRecord> {
    let needle = query.search.to_lowercase();
    let mut results: Vec<PropertyRecord> = records
        .iter()
        .filter(|record| {
            matches_search(record, &needle)
                && query.city.admits(&record.location)
                && query.bedrooms.admits(record.beds)
                && query.price_band.admits(representative_rupees(&record.price))
        })
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Relevance => {}
        SortOrder::PriceLowToHigh => {
            results.sort_by_key(|record| representative_rupees(&record.price));
        }
        SortOrder::PriceHighToLow => {
            results.sort_by_key(|record| Reverse(representative_rupees(&record.price)));
        }
        SortOrder::Newest => {
            results.sort_by_key(|record| Reverse(recency_rank(&record.id.0)));
        }
    }

    results
}

fn matches_search(record: &PropertyRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle) || record.location.to_lowercase().contains(needle)
}

/// Listing ids are issued as decimal strings, so recency is their numeric
/// value. Ids without leading digits rank as zero.
fn recency_rank(id: &str) -> i64 {
    let trimmed = id.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

/// Distinct first comma segments of every location, trimmed, in the order
/// the catalog first mentions them. Presentation layers prepend their own
/// "All" entry.
pub fn extract_cities(records: &[PropertyRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cities = Vec::new();
    for record in records {
        let city = record
            .location
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        if seen.insert(city.clone()) {
            cities.push(city);
        }
    }
    cities
}
