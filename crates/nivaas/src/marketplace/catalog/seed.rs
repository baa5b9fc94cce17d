use chrono::NaiveDate;

use super::domain::{
    AgeBand, Facing, FurnishingState, ListingId, ListingStatus, PropertyKind, PropertyRecord,
    SellerCard, SellerKind, TrustGrade,
};

/// Built-in sample catalog used to hydrate fresh repositories and as
/// fixture data. Ids are sequential decimal strings, so freshly submitted
/// listings continue the sequence and the newest sort stays meaningful.
pub fn sample_catalog() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: ListingId("1".to_string()),
            title: "Sattva Vasanta Skye".to_string(),
            price: "₹83.47 L – ₹2.45 Cr".to_string(),
            location: "Devanahalli, North Bangalore".to_string(),
            beds: 3,
            baths: 2,
            area: "1,200 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: Some(Facing::NorthEast),
            age: Some(AgeBand::UnderConstruction),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::APlus),
            rera_id: Some("PRM/KA/RERA/1251/446/PR/010119/002054".to_string()),
            description: "Premium 2 and 3 BHK residences set around landscaped courts, minutes from the airport corridor.".to_string(),
            amenities: amenities(&["Swimming Pool", "Gym", "Club House", "Children's Play Area", "24/7 Security"]),
            seller: seller("Sattva Group", SellerKind::Builder),
            listed_on: date(2024, 11, 8),
        },
        PropertyRecord {
            id: ListingId("2".to_string()),
            title: "Prestige Lakeside Habitat".to_string(),
            price: "₹1.2 Cr – ₹3.8 Cr".to_string(),
            location: "Whitefield, Bangalore".to_string(),
            beds: 4,
            baths: 3,
            area: "2,800 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: Some(Facing::East),
            age: Some(AgeBand::OneToFiveYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: true,
            trust_grade: Some(TrustGrade::A),
            rera_id: None,
            description: "Lakefront towers and villaments with a private boardwalk on the Varthur edge of Whitefield.".to_string(),
            amenities: amenities(&["Swimming Pool", "Tennis Court", "Club House", "Jogging Track"]),
            seller: seller("Prestige Estates", SellerKind::Builder),
            listed_on: date(2024, 12, 2),
        },
        PropertyRecord {
            id: ListingId("3".to_string()),
            title: "Godrej Meridien".to_string(),
            price: "₹65 L – ₹1.85 Cr".to_string(),
            location: "Sector 106, Gurgaon".to_string(),
            beds: 2,
            baths: 2,
            area: "1,100 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::Unfurnished,
            facing: Some(Facing::North),
            age: Some(AgeBand::UpToOneYear),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::BPlus),
            rera_id: None,
            description: "Dwarka Expressway address with a five-tier clubhouse and concierge-run residences.".to_string(),
            amenities: amenities(&["Gym", "Club House", "Power Backup", "Covered Parking"]),
            seller: seller("Godrej Properties", SellerKind::Builder),
            listed_on: date(2024, 12, 19),
        },
        PropertyRecord {
            id: ListingId("4".to_string()),
            title: "Lodha Serenity".to_string(),
            price: "₹2.8 Cr – ₹6.5 Cr".to_string(),
            location: "Kolshet Road, Thane West".to_string(),
            beds: 3,
            baths: 3,
            area: "1,800 sq ft".to_string(),
            kind: PropertyKind::Villa,
            furnishing: FurnishingState::SemiFurnished,
            facing: Some(Facing::SouthEast),
            age: Some(AgeBand::OneToFiveYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::APlus),
            rera_id: None,
            description: "Riverside villas inside a 100-acre township with a forest trail and private ghat.".to_string(),
            amenities: amenities(&["Swimming Pool", "Garden", "Club House", "24/7 Security", "Covered Parking"]),
            seller: seller("Lodha Group", SellerKind::Builder),
            listed_on: date(2025, 1, 6),
        },
        PropertyRecord {
            id: ListingId("5".to_string()),
            title: "DLF Cyber City Residences".to_string(),
            price: "₹1.5 Cr – ₹4.2 Cr".to_string(),
            location: "Cyber City, Gurgaon".to_string(),
            beds: 3,
            baths: 3,
            area: "1,650 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::FullyFurnished,
            facing: None,
            age: Some(AgeBand::FiveToTenYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::APlus),
            rera_id: None,
            description: "Walk-to-work towers beside the Cyber Hub food street and rapid metro loop.".to_string(),
            amenities: amenities(&["Gym", "Power Backup", "Lift", "24/7 Security"]),
            seller: seller("DLF Limited", SellerKind::Builder),
            listed_on: date(2025, 1, 27),
        },
        PropertyRecord {
            id: ListingId("6".to_string()),
            title: "Hiranandani Gardens".to_string(),
            price: "₹2.1 Cr – ₹5.8 Cr".to_string(),
            location: "Powai, Mumbai".to_string(),
            beds: 4,
            baths: 4,
            area: "2,200 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: Some(Facing::West),
            age: Some(AgeBand::OverTenYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::A),
            rera_id: None,
            description: "Neo-classical towers ringing the Powai lake promenade, schools and hospitals in the estate.".to_string(),
            amenities: amenities(&["Garden", "Club House", "Jogging Track", "Covered Parking"]),
            seller: seller("Hiranandani Communities", SellerKind::Builder),
            listed_on: date(2025, 2, 14),
        },
        PropertyRecord {
            id: ListingId("7".to_string()),
            title: "Sobha City".to_string(),
            price: "₹45 L – ₹1.2 Cr".to_string(),
            location: "Thanisandra, Bangalore".to_string(),
            beds: 2,
            baths: 2,
            area: "980 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::Unfurnished,
            facing: Some(Facing::NorthWest),
            age: Some(AgeBand::UpToOneYear),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::BPlus),
            rera_id: None,
            description: "Compact 2 BHK homes on Thanisandra Main Road with an eight-acre central park.".to_string(),
            amenities: amenities(&["Swimming Pool", "Children's Play Area", "Gym"]),
            seller: seller("Sobha Developers", SellerKind::Builder),
            listed_on: date(2025, 3, 3),
        },
        PropertyRecord {
            id: ListingId("8".to_string()),
            title: "Emaar Palm Heights".to_string(),
            price: "₹1.8 Cr – ₹3.5 Cr".to_string(),
            location: "Sector 77, Gurgaon".to_string(),
            beds: 3,
            baths: 3,
            area: "1,750 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: Some(Facing::South),
            age: Some(AgeBand::OneToFiveYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: true,
            trust_grade: Some(TrustGrade::A),
            rera_id: None,
            description: "Corner-unit 3 BHKs off NH-48 with a skywalk to the sector high street.".to_string(),
            amenities: amenities(&["Club House", "Tennis Court", "Power Backup", "24/7 Security"]),
            seller: seller("Emaar India", SellerKind::Builder),
            listed_on: date(2025, 3, 21),
        },
        PropertyRecord {
            id: ListingId("9".to_string()),
            title: "Mahindra Lifespaces Antheia".to_string(),
            price: "₹75 L – ₹2.1 Cr".to_string(),
            location: "Baner, Pune".to_string(),
            beds: 3,
            baths: 2,
            area: "1,400 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: None,
            age: Some(AgeBand::OneToFiveYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::AMinus),
            rera_id: None,
            description: "IGBC-rated homes between the Baner hills and the Hinjewadi IT corridor.".to_string(),
            amenities: amenities(&["Garden", "Gym", "Jogging Track", "Lift"]),
            seller: seller("Mahindra Lifespaces", SellerKind::Builder),
            listed_on: date(2025, 4, 9),
        },
        PropertyRecord {
            id: ListingId("10".to_string()),
            title: "Tata Housing Primanti".to_string(),
            price: "₹1.2 Cr – ₹2.8 Cr".to_string(),
            location: "Sector 72, Gurgaon".to_string(),
            beds: 2,
            baths: 2,
            area: "1,300 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: Some(Facing::East),
            age: Some(AgeBand::FiveToTenYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::A),
            rera_id: None,
            description: "Low-density executive floors backing the Southern Peripheral Road green belt.".to_string(),
            amenities: amenities(&["Swimming Pool", "Club House", "Covered Parking"]),
            seller: seller("Tata Housing", SellerKind::Builder),
            listed_on: date(2025, 4, 28),
        },
        PropertyRecord {
            id: ListingId("11".to_string()),
            title: "Brigade Cornerstone Utopia".to_string(),
            price: "₹95 L – ₹3.2 Cr".to_string(),
            location: "Varthur, Bangalore".to_string(),
            beds: 4,
            baths: 4,
            area: "2,100 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::Unfurnished,
            facing: Some(Facing::NorthEast),
            age: Some(AgeBand::UnderConstruction),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::APlus),
            rera_id: None,
            description: "Eco-district with its own lake rejuvenation, co-working decks, and a school inside the campus.".to_string(),
            amenities: amenities(&["Swimming Pool", "Gym", "Club House", "Children's Play Area", "Jogging Track"]),
            seller: seller("Brigade Group", SellerKind::Builder),
            listed_on: date(2025, 5, 16),
        },
        PropertyRecord {
            id: ListingId("12".to_string()),
            title: "Oberoi Realty Esquire".to_string(),
            price: "₹3.5 Cr – ₹8.2 Cr".to_string(),
            location: "Goregaon East, Mumbai".to_string(),
            beds: 4,
            baths: 5,
            area: "2,800 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::FullyFurnished,
            facing: Some(Facing::West),
            age: Some(AgeBand::OneToFiveYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: true,
            trust_grade: Some(TrustGrade::APlus),
            rera_id: None,
            description: "Aarey-facing 4 BHKs over the Oberoi Garden City mall and international school.".to_string(),
            amenities: amenities(&["Swimming Pool", "Gym", "Club House", "24/7 Security", "Lift"]),
            seller: seller("Oberoi Realty", SellerKind::Builder),
            listed_on: date(2025, 6, 4),
        },
        PropertyRecord {
            id: ListingId("13".to_string()),
            title: "Puravankara Purva Riviera".to_string(),
            price: "₹68 L – ₹1.8 Cr".to_string(),
            location: "Marathahalli, Bangalore".to_string(),
            beds: 2,
            baths: 2,
            area: "1,150 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::SemiFurnished,
            facing: None,
            age: Some(AgeBand::OverTenYears),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::BPlus),
            rera_id: None,
            description: "Established community off the Outer Ring Road with mature trees and a resale-friendly layout.".to_string(),
            amenities: amenities(&["Garden", "Club House", "Power Backup"]),
            seller: seller("Asha Venkatesh", SellerKind::Owner),
            listed_on: date(2025, 6, 23),
        },
        PropertyRecord {
            id: ListingId("14".to_string()),
            title: "Shapoorji Pallonji Joyville".to_string(),
            price: "₹42 L – ₹95 L".to_string(),
            location: "Sector 102, Gurgaon".to_string(),
            beds: 1,
            baths: 1,
            area: "650 sq ft".to_string(),
            kind: PropertyKind::Apartment,
            furnishing: FurnishingState::Unfurnished,
            facing: Some(Facing::North),
            age: Some(AgeBand::UpToOneYear),
            status: ListingStatus::Available,
            verified: true,
            urgent: false,
            trust_grade: Some(TrustGrade::B),
            rera_id: None,
            description: "Starter 1 BHKs on the Dwarka Expressway with a clubhouse shared across the Joyville phases.".to_string(),
            amenities: amenities(&["Children's Play Area", "Gym", "24/7 Security"]),
            seller: seller("Horizon Realty Partners", SellerKind::Agent),
            listed_on: date(2025, 7, 11),
        },
    ]
}

fn amenities(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn seller(name: &str, kind: SellerKind) -> SellerCard {
    SellerCard {
        name: name.to_string(),
        kind,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
