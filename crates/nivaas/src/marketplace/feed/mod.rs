mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::marketplace::catalog::PropertyRecord;

#[derive(Debug)]
pub enum CatalogFeedError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogFeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFeedError::Io(err) => write!(f, "failed to read catalog feed: {}", err),
            CatalogFeedError::Csv(err) => write!(f, "invalid catalog feed data: {}", err),
        }
    }
}

impl std::error::Error for CatalogFeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogFeedError::Io(err) => Some(err),
            CatalogFeedError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogFeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogFeedError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CatalogFeedImporter;

impl CatalogFeedImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>, CatalogFeedError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a listing export in row order, keeping the first row for any
    /// repeated id so a sloppy re-export cannot shadow earlier records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, CatalogFeedError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        for record in parser::parse_records(reader)? {
            if seen.insert(record.id.0.clone()) {
                records.push(record);
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::catalog::{FurnishingState, PropertyKind, SellerKind, TrustGrade};
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str = "ID,Title,Price,Location,Beds,Baths,Area,Type,Furnishing,Verified,Urgent,Listed On,Description,Amenities,RERA,Seller,Seller Type,Trust Grade\n";

    #[test]
    fn importer_parses_complete_rows() {
        let csv = format!(
            "{HEADER}1,Sattva Vasanta Skye,\"₹83.47 L – ₹2.45 Cr\",\"Devanahalli, North Bangalore\",3,2,\"1,200 sq ft\",Apartment,Semi-Furnished,true,false,2024-11-08,Premium homes by the airport corridor.,Swimming Pool|Gym|Club House,PRM/KA/RERA/1251/446/PR/010119/002054,Sattva Group,Builder,A+\n"
        );
        let records = CatalogFeedImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id.0, "1");
        assert_eq!(record.title, "Sattva Vasanta Skye");
        assert_eq!(record.price, "₹83.47 L – ₹2.45 Cr");
        assert_eq!(record.location, "Devanahalli, North Bangalore");
        assert_eq!(record.beds, 3);
        assert_eq!(record.baths, 2);
        assert_eq!(record.kind, PropertyKind::Apartment);
        assert_eq!(record.furnishing, FurnishingState::SemiFurnished);
        assert!(record.verified);
        assert!(!record.urgent);
        assert_eq!(record.trust_grade, Some(TrustGrade::APlus));
        assert_eq!(
            record.listed_on,
            NaiveDate::from_ymd_opt(2024, 11, 8).unwrap()
        );
        assert_eq!(
            record.amenities,
            vec!["Swimming Pool", "Gym", "Club House"]
        );
        assert_eq!(record.seller.name, "Sattva Group");
        assert_eq!(record.seller.kind, SellerKind::Builder);
    }

    #[test]
    fn importer_skips_rows_without_id_or_title() {
        let csv = format!(
            "{HEADER},Missing Id,₹45 L,\"Thanisandra, Bangalore\",2,2,980 sq ft,Apartment,Unfurnished,true,false,2025-03-03,desc,,,Seller,Owner,B+\n\
             7,,₹45 L,\"Thanisandra, Bangalore\",2,2,980 sq ft,Apartment,Unfurnished,true,false,2025-03-03,desc,,,Seller,Owner,B+\n\
             8,Sobha City,₹45 L,\"Thanisandra, Bangalore\",2,2,980 sq ft,Apartment,Unfurnished,true,false,2025-03-03,desc,,,Seller,Owner,B+\n"
        );
        let records = CatalogFeedImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.0, "8");
    }

    #[test]
    fn importer_keeps_first_of_duplicate_ids() {
        let csv = format!(
            "{HEADER}3,First Version,₹65 L,\"Sector 106, Gurgaon\",2,2,\"1,100 sq ft\",Apartment,Unfurnished,true,false,2024-12-19,desc,,,Seller,Builder,B+\n\
             3,Second Version,₹70 L,\"Sector 106, Gurgaon\",2,2,\"1,100 sq ft\",Apartment,Unfurnished,true,false,2024-12-20,desc,,,Seller,Builder,B+\n"
        );
        let records = CatalogFeedImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "First Version");
    }

    #[test]
    fn unknown_labels_fall_back_to_defaults() {
        let csv = format!(
            "{HEADER}9,Mystery Plot,₹75 L,\"Baner, Pune\",not-a-number,2,\"1,400 sq ft\",Castle,Gold-Plated,definitely,false,soon,desc,,,,Conglomerate,Z++\n"
        );
        let records = CatalogFeedImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let record = &records[0];
        assert_eq!(record.kind, PropertyKind::Apartment);
        assert_eq!(record.furnishing, FurnishingState::Unfurnished);
        assert_eq!(record.beds, 0);
        assert!(!record.verified);
        assert_eq!(record.trust_grade, None);
        assert_eq!(record.seller.name, "Private Seller");
        assert_eq!(record.seller.kind, SellerKind::Owner);
        assert_eq!(record.listed_on, NaiveDate::default());
    }

    #[test]
    fn listed_on_accepts_both_export_formats() {
        assert_eq!(
            parser::parse_listed_on_for_tests("2025-03-03"),
            NaiveDate::from_ymd_opt(2025, 3, 3)
        );
        assert_eq!(
            parser::parse_listed_on_for_tests("03/03/2025"),
            NaiveDate::from_ymd_opt(2025, 3, 3)
        );
        assert!(parser::parse_listed_on_for_tests("  ").is_none());
        assert!(parser::parse_listed_on_for_tests("soon").is_none());
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = CatalogFeedImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            CatalogFeedError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
