use crate::infra::load_catalog_records;
use clap::Args;
use nivaas::error::AppError;
use nivaas::marketplace::catalog::{
    filter_and_sort, MarketReport, MarketSummary, PropertyRecord, SearchQuery,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogSearchArgs {
    /// Free-text needle matched against listing titles and locations
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// City filter; `all` disables it
    #[arg(long, default_value = "all")]
    pub(crate) city: String,
    /// Bedroom count filter; `all` disables it
    #[arg(long, default_value = "all")]
    pub(crate) bedrooms: String,
    /// Price band key (under-50l, 50l-1cr, 1cr-2cr, above-2cr); `all` disables it
    #[arg(long, default_value = "all")]
    pub(crate) price_range: String,
    /// Sort order (relevance, price-low, price-high, newest)
    #[arg(long, default_value = "relevance")]
    pub(crate) sort: String,
    /// Optional portal CSV export to search instead of the sample catalog
    #[arg(long)]
    pub(crate) feed_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct MarketSummaryArgs {
    /// Optional portal CSV export to aggregate instead of the sample catalog
    #[arg(long)]
    pub(crate) feed_csv: Option<PathBuf>,
}

pub(crate) fn run_catalog_search(args: CatalogSearchArgs) -> Result<(), AppError> {
    let CatalogSearchArgs {
        search,
        city,
        bedrooms,
        price_range,
        sort,
        feed_csv,
    } = args;

    let (records, imported) = load_catalog_records(feed_csv)?;
    let query = SearchQuery::from_params(&search, &city, &bedrooms, &price_range, &sort);
    let results = filter_and_sort(&records, &query);

    println!("Catalog search");
    println!("Data source: {}", data_source_label(imported));
    println!(
        "Query: search={:?} city={:?} bedrooms={:?} price_range={:?} sort={:?}",
        search, city, bedrooms, price_range, sort
    );

    if results.is_empty() {
        println!("\nNo listings matched.");
        return Ok(());
    }

    println!("\n{} of {} listings matched", results.len(), records.len());
    for record in &results {
        render_listing_line(record);
    }

    Ok(())
}

pub(crate) fn run_market_summary(args: MarketSummaryArgs) -> Result<(), AppError> {
    let MarketSummaryArgs { feed_csv } = args;

    let (records, imported) = load_catalog_records(feed_csv)?;
    let summary = MarketReport::from_records(&records).summary();

    println!("Market summary");
    println!("Data source: {}", data_source_label(imported));
    render_market_summary(&summary);

    Ok(())
}

fn data_source_label(imported: bool) -> &'static str {
    if imported {
        "portal feed export"
    } else {
        "built-in sample catalog"
    }
}

fn render_listing_line(record: &PropertyRecord) {
    let mut badges = String::new();
    if record.verified {
        badges.push_str(" [verified]");
    }
    if record.urgent {
        badges.push_str(" [urgent]");
    }

    println!(
        "- #{} {} | {} | {} | {} BHK, {} bath | {} | {}{}",
        record.id.0,
        record.title,
        record.location,
        record.price,
        record.beds,
        record.baths,
        record.area,
        record.status.label(),
        badges
    );
}

fn render_market_summary(summary: &MarketSummary) {
    println!(
        "\n{} listings | {} verified | {} urgent",
        summary.total_listings, summary.verified_listings, summary.urgent_listings
    );

    println!("\nStatus mix");
    for entry in &summary.status_mix {
        println!("- {}: {}", entry.status_label, entry.listings);
    }

    println!("\nListings by locality");
    for entry in &summary.city_counts {
        println!("- {}: {}", entry.city, entry.listings);
    }

    println!("\nBedroom mix");
    for entry in &summary.bedroom_mix {
        println!("- {} BHK: {}", entry.beds, entry.listings);
    }

    match &summary.price_spread {
        Some(spread) => {
            println!("\nPrice spread (sale listings)");
            println!("- Minimum: {} ({})", spread.min_display, spread.min_rupees);
            println!("- Maximum: {} ({})", spread.max_display, spread.max_rupees);
            println!("- Mean: {} ({})", spread.mean_display, spread.mean_rupees);
        }
        None => println!("\nPrice spread: no priced listings"),
    }

    if summary.unpriced_listings > 0 {
        println!(
            "\n{} listings without a comparable sale price (rentals or price on request)",
            summary.unpriced_listings
        );
    }
}
