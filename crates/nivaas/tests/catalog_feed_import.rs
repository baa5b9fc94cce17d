use nivaas::marketplace::catalog::{
    filter_and_sort, PropertyKind, SearchQuery, SellerKind, TrustGrade,
};
use nivaas::marketplace::feed::{CatalogFeedError, CatalogFeedImporter};

#[test]
fn importer_preserves_export_row_order() {
    let csv = "ID,Title,Price,Location,Beds,Baths,Area,Type,Furnishing,Verified,Urgent,Listed On,Description,Amenities,RERA,Seller,Seller Type,Trust Grade\n\
5,Sobha City,\"₹45 L – ₹1.2 Cr\",\"Thanisandra, Bangalore\",2,2,980 sq ft,Apartment,Unfurnished,true,false,2025-03-03,Compact homes.,Gym,PRM/KA/RERA/1251/309/PR/170916/000205,Sobha Limited,Builder,A\n\
2,Prestige Lakeside Habitat,\"₹1.2 Cr – ₹3.8 Cr\",\"Whitefield, Bangalore\",4,3,\"2,480 sq ft\",Villa,Fully Furnished,true,true,2024-12-02,Lakeside villas.,Club House,PRM/KA/RERA/1250/303/PR/171015/000505,Prestige Group,Builder,A\n";

    let records = CatalogFeedImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    let ids: Vec<&str> = records.iter().map(|record| record.id.0.as_str()).collect();
    assert_eq!(ids, vec!["5", "2"]);
    assert_eq!(records[1].kind, PropertyKind::Villa);
    assert_eq!(records[1].seller.kind, SellerKind::Builder);
    assert_eq!(records[1].trust_grade, Some(TrustGrade::A));
}

#[test]
fn importer_handles_full_portal_export() {
    let data = include_bytes!("../portal_listings.csv");

    let records = CatalogFeedImporter::from_reader(&data[..]).expect("portal export imports");

    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|record| !record.title.is_empty()));
    assert!(records.iter().all(|record| !record.amenities.is_empty()));
}

#[test]
fn imported_records_flow_through_the_search_pipeline() {
    let data = include_bytes!("../portal_listings.csv");
    let records = CatalogFeedImporter::from_reader(&data[..]).expect("portal export imports");

    let page = filter_and_sort(
        &records,
        &SearchQuery::from_params("", "all", "all", "50l-1cr", "price-low"),
    );

    let ids: Vec<&str> = page.iter().map(|record| record.id.0.as_str()).collect();
    assert_eq!(ids, vec!["3", "7", "1"]);
}

#[test]
fn missing_feed_files_report_the_io_cause() {
    let error =
        CatalogFeedImporter::from_path("./no-such-export.csv").expect_err("expected io error");

    assert!(matches!(error, CatalogFeedError::Io(_)));
    assert!(error.to_string().contains("failed to read catalog feed"));
}
