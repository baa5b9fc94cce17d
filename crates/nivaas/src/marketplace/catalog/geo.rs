use serde::Serialize;

use super::domain::{ListingId, PropertyRecord};

const LOCALITY_COORDINATES: &[(&str, (f64, f64))] = &[
    ("Devanahalli", (13.2431, 77.7085)),
    ("Whitefield", (12.9698, 77.7500)),
    ("Sector 106", (28.4595, 77.0266)),
    ("Kolshet Road", (19.2183, 72.9781)),
];

// Bengaluru city centre, used when no locality matches.
const DEFAULT_COORDINATES: (f64, f64) = (12.9716, 77.5946);

const JITTER_DEGREES: f64 = 0.005;

/// Screen-space pin for the catalog map, positioned on an equirectangular
/// projection and clamped away from the viewport edges.
#[derive(Debug, Clone, Serialize)]
pub struct MapPin {
    pub listing_id: ListingId,
    pub title: String,
    pub price: String,
    pub latitude: f64,
    pub longitude: f64,
    pub x_pct: f64,
    pub y_pct: f64,
}

pub fn map_pins(records: &[PropertyRecord]) -> Vec<MapPin> {
    records.iter().map(pin_for).collect()
}

pub fn pin_for(record: &PropertyRecord) -> MapPin {
    let (base_latitude, base_longitude) = locality_coordinates(&record.location);
    let latitude = base_latitude + jitter(&record.id.0, 0x9e37);
    let longitude = base_longitude + jitter(&record.id.0, 0x79b9);

    MapPin {
        listing_id: record.id.clone(),
        title: record.title.clone(),
        price: record.price.clone(),
        latitude,
        longitude,
        x_pct: ((longitude + 180.0) / 360.0 * 100.0).clamp(5.0, 95.0),
        y_pct: ((90.0 - latitude) / 180.0 * 100.0).clamp(5.0, 95.0),
    }
}

fn locality_coordinates(location: &str) -> (f64, f64) {
    LOCALITY_COORDINATES
        .iter()
        .find(|(locality, _)| location.contains(*locality))
        .map(|(_, coordinates)| *coordinates)
        .unwrap_or(DEFAULT_COORDINATES)
}

/// Spreads pins that share a locality so they stay distinguishable. The
/// offset is a stable function of the listing id, within ±0.005 degrees.
fn jitter(id: &str, salt: u64) -> f64 {
    let mut acc = salt;
    for byte in id.bytes() {
        acc = acc.wrapping_mul(31).wrapping_add(u64::from(byte));
    }
    ((acc % 1001) as f64 / 500.0 - 1.0) * JITTER_DEGREES
}

#[cfg(test)]
mod tests {
    use super::super::seed::sample_catalog;
    use super::*;

    #[test]
    fn known_localities_pin_near_their_table_coordinates() {
        let catalog = sample_catalog();
        let record = catalog
            .iter()
            .find(|record| record.location.contains("Devanahalli"))
            .expect("seeded Devanahalli listing");
        let pin = pin_for(record);
        assert!((pin.latitude - 13.2431).abs() <= JITTER_DEGREES);
        assert!((pin.longitude - 77.7085).abs() <= JITTER_DEGREES);
    }

    #[test]
    fn unknown_localities_fall_back_to_the_default_centre() {
        let catalog = sample_catalog();
        let record = catalog
            .iter()
            .find(|record| record.location == "Baner, Pune")
            .expect("seeded Pune listing");
        let pin = pin_for(record);
        assert!((pin.latitude - DEFAULT_COORDINATES.0).abs() <= JITTER_DEGREES);
        assert!((pin.longitude - DEFAULT_COORDINATES.1).abs() <= JITTER_DEGREES);
    }

    #[test]
    fn pins_are_stable_per_listing() {
        let catalog = sample_catalog();
        let first = pin_for(&catalog[0]);
        let second = pin_for(&catalog[0]);
        assert_eq!(first.latitude.to_bits(), second.latitude.to_bits());
        assert_eq!(first.longitude.to_bits(), second.longitude.to_bits());
    }

    #[test]
    fn listings_sharing_a_locality_get_distinct_pins() {
        let catalog = sample_catalog();
        let mut twin = catalog[0].clone();
        twin.id = ListingId("99".to_string());
        let original = pin_for(&catalog[0]);
        let moved = pin_for(&twin);
        assert!(original.latitude != moved.latitude || original.longitude != moved.longitude);
    }

    #[test]
    fn projected_pins_stay_inside_the_viewport_margins() {
        for pin in map_pins(&sample_catalog()) {
            assert!((5.0..=95.0).contains(&pin.x_pct), "x_pct {}", pin.x_pct);
            assert!((5.0..=95.0).contains(&pin.y_pct), "y_pct {}", pin.y_pct);
        }
    }
}
