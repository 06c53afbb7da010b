//! `harvest` command: run the catalogue scrape and hand the collection to
//! its consumers (CSV export, persistence).

use std::path::Path;

use anyhow::Context;
use bookdash_core::{export, AppConfig, CatalogueItem};
use bookdash_scraper::CatalogueClient;

/// Run the harvester with the configured or overridden page bound, then
/// export and/or persist the collection.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the CSV file cannot
/// be written, or persistence fails. Page and item failures during the
/// harvest itself are recoverable and only shrink the result set.
pub(crate) async fn run_harvest(
    config: &AppConfig,
    pages: Option<u32>,
    out: Option<&Path>,
    store: bool,
    replace: bool,
) -> anyhow::Result<()> {
    let page_count = pages.unwrap_or(config.page_count);
    let client = CatalogueClient::new(
        &config.catalogue_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.inter_request_delay_ms,
    )?;

    println!("harvesting up to {page_count} catalogue pages...");
    let report = client.harvest(page_count).await;

    if report.pages_skipped > 0 {
        tracing::warn!(
            pages_skipped = report.pages_skipped,
            "some catalogue pages failed to load"
        );
    }
    if report.items_skipped > 0 {
        tracing::warn!(
            items_skipped = report.items_skipped,
            "some listing items were malformed and skipped"
        );
    }
    println!(
        "harvested {} records from {} of {page_count} pages",
        report.items.len(),
        report.pages_fetched
    );

    if let Some(path) = out {
        std::fs::write(path, export::to_csv(&report.items))
            .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
        println!("wrote CSV export to {}", path.display());
    }

    if store {
        persist(config, &report.items, replace).await?;
    }

    Ok(())
}

async fn persist(
    config: &AppConfig,
    items: &[CatalogueItem],
    replace: bool,
) -> anyhow::Result<()> {
    let pool = crate::connect_store(config).await?;

    bookdash_db::run_migrations(&pool)
        .await
        .context("failed to run store migrations")?;

    if replace {
        let removed = bookdash_db::clear_items(&pool).await?;
        tracing::info!(removed, "cleared previously stored records");
    }

    let inserted = bookdash_db::insert_items(&pool, items).await?;
    println!("stored {inserted} records");
    Ok(())
}
