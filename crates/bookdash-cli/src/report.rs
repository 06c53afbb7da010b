//! `report` command: read the stored collection back and print descriptive
//! statistics.

use bookdash_core::search::search_titles;
use bookdash_core::{stats, AppConfig, CatalogueItem};
use bookdash_db::BookRow;

/// Read every stored record and print count-by-rating, mean price per
/// rating, price/rating correlation, a price histogram, the top-N most
/// expensive titles, and optionally a keyword title search.
///
/// # Errors
///
/// Returns an error if the store is unreachable or unconfigured.
pub(crate) async fn run_report(
    config: &AppConfig,
    search: Option<&str>,
    top: usize,
    bins: usize,
) -> anyhow::Result<()> {
    let pool = crate::connect_store(config).await?;
    let rows = bookdash_db::list_items(&pool).await?;
    let items: Vec<CatalogueItem> = rows.into_iter().map(BookRow::into_item).collect();

    if items.is_empty() {
        println!("no records stored; run `bookdash harvest --store` first");
        return Ok(());
    }

    println!("{} records stored", items.len());

    println!("\ncount by rating:");
    for (rating, count) in stats::rating_counts(&items) {
        println!("  {rating} stars  {count:>6}");
    }

    println!("\naverage price by rating:");
    for (rating, mean) in stats::mean_price_by_rating(&items) {
        println!("  {rating} stars  {mean:>8.2}");
    }

    match stats::price_rating_correlation(&items) {
        Some(r) => println!("\nprice/rating correlation: {r:.4}"),
        None => println!("\nprice/rating correlation: n/a"),
    }

    println!("\nprice distribution ({bins} bins):");
    for bin in stats::price_histogram(&items, bins) {
        println!("  {:>8.2} .. {:>8.2}  {:>6}", bin.lower, bin.upper, bin.count);
    }

    println!("\ntop {top} by price:");
    for item in stats::top_by_price(&items, top) {
        println!("  {:>8.2}  {}", item.price, item.title);
    }

    if let Some(term) = search {
        let matches = search_titles(&items, term);
        println!("\ntitles containing \"{term}\": {}", matches.len());
        for item in &matches {
            println!("  - {}", item.title);
        }
    }

    Ok(())
}
