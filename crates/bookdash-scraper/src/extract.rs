//! Per-item extraction from a catalogue listing page.
//!
//! Extraction of a single item is fallible: a listing block missing one of
//! its expected sub-elements produces a structural-mismatch error carrying
//! the page number and item index, and the page loop decides what to do with
//! it. The page-level function never fails — a page with no matching blocks
//! simply yields nothing.

use bookdash_core::CatalogueItem;
use scraper::{ElementRef, Html};

use crate::error::ScraperError;
use crate::parse::{clean_price, rating_from_class};
use crate::selectors;

/// Extracts every listing item on a page, in document order.
///
/// Each element yields either a normalized [`CatalogueItem`] or a
/// [`ScraperError::ItemStructure`] naming the piece that was absent.
#[must_use]
pub fn extract_listing_items(html: &str, page: u32) -> Vec<Result<CatalogueItem, ScraperError>> {
    let document = Html::parse_document(html);
    document
        .select(&selectors::PRODUCT)
        .enumerate()
        .map(|(index, element)| extract_item(element, page, index))
        .collect()
}

fn extract_item(
    element: ElementRef<'_>,
    page: u32,
    item: usize,
) -> Result<CatalogueItem, ScraperError> {
    let mismatch = |missing: &'static str| ScraperError::ItemStructure {
        page,
        item,
        missing,
    };

    // The link text is truncated by the site; the full title lives in the
    // `title` attribute and arrives entity-unescaped from the parser.
    let title = element
        .select(&selectors::TITLE_LINK)
        .next()
        .ok_or_else(|| mismatch("title link"))?
        .value()
        .attr("title")
        .ok_or_else(|| mismatch("title attribute"))?
        .to_owned();

    let price_text: String = element
        .select(&selectors::PRICE)
        .next()
        .ok_or_else(|| mismatch("price block"))?
        .text()
        .collect();
    let price = clean_price(&price_text).ok_or_else(|| mismatch("parseable price"))?;

    let availability = element
        .select(&selectors::AVAILABILITY)
        .next()
        .ok_or_else(|| mismatch("availability block"))?
        .text()
        .collect::<String>()
        .trim()
        .to_owned();

    let rating_token = element
        .select(&selectors::RATING)
        .next()
        .ok_or_else(|| mismatch("rating element"))?
        .value()
        .classes()
        .find(|class| *class != "star-rating")
        .ok_or_else(|| mismatch("rating word token"))?;
    let rating = rating_from_class(rating_token);

    Ok(CatalogueItem {
        title,
        price,
        availability,
        rating,
    })
}
