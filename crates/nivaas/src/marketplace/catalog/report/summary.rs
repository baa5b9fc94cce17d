use std::collections::HashMap;

use super::super::domain::{ListingStatus, PropertyRecord};
use super::super::price::{format_display_price, representative_rupees};
use super::views::{BedroomMixEntry, CityCountEntry, MarketSummary, PriceSpread, StatusMixEntry};

/// Aggregation over one catalog snapshot. Build with `from_records`, then
/// render a deterministic serializable view with `summary`.
#[derive(Debug, Default)]
pub struct MarketReport {
    pub total: usize,
    pub verified: usize,
    pub urgent: usize,
    pub status_mix: HashMap<ListingStatus, usize>,
    pub city_counts: HashMap<String, usize>,
    pub bedroom_mix: HashMap<u8, usize>,
    pub priced: Vec<u64>,
    pub unpriced: usize,
}

impl MarketReport {
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        let mut report = Self::default();

        for record in records {
            report.total += 1;
            if record.verified {
                report.verified += 1;
            }
            if record.urgent {
                report.urgent += 1;
            }
            *report.status_mix.entry(record.status).or_default() += 1;

            let city = record
                .location
                .split(',')
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            *report.city_counts.entry(city).or_default() += 1;
            *report.bedroom_mix.entry(record.beds).or_default() += 1;

            match representative_rupees(&record.price) {
                0 => report.unpriced += 1,
                rupees => report.priced.push(rupees),
            }
        }

        report
    }

    pub fn summary(&self) -> MarketSummary {
        let status_mix = ListingStatus::ordered()
            .into_iter()
            .filter_map(|status| {
                self.status_mix.get(&status).map(|&listings| StatusMixEntry {
                    status,
                    status_label: status.label(),
                    listings,
                })
            })
            .collect();

        let mut city_counts: Vec<CityCountEntry> = self
            .city_counts
            .iter()
            .map(|(city, &listings)| CityCountEntry {
                city: city.clone(),
                listings,
            })
            .collect();
        city_counts.sort_by(|a, b| {
            b.listings
                .cmp(&a.listings)
                .then_with(|| a.city.cmp(&b.city))
        });

        let mut bedroom_mix: Vec<BedroomMixEntry> = self
            .bedroom_mix
            .iter()
            .map(|(&beds, &listings)| BedroomMixEntry { beds, listings })
            .collect();
        bedroom_mix.sort_by_key(|entry| entry.beds);

        MarketSummary {
            total_listings: self.total,
            verified_listings: self.verified,
            urgent_listings: self.urgent,
            status_mix,
            city_counts,
            bedroom_mix,
            price_spread: spread(&self.priced),
            unpriced_listings: self.unpriced,
        }
    }
}

fn spread(priced: &[u64]) -> Option<PriceSpread> {
    let first = *priced.first()?;
    let mut min_rupees = first;
    let mut max_rupees = first;
    let mut total: u64 = 0;
    for &rupees in priced {
        min_rupees = min_rupees.min(rupees);
        max_rupees = max_rupees.max(rupees);
        total += rupees;
    }
    let mean_rupees = total / priced.len() as u64;

    Some(PriceSpread {
        min_rupees,
        max_rupees,
        mean_rupees,
        min_display: format_display_price(min_rupees),
        max_display: format_display_price(max_rupees),
        mean_display: format_display_price(mean_rupees),
    })
}
