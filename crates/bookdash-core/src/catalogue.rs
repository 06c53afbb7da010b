//! Domain type shared by the harvester, analysis, export, and persistence
//! layers.

use serde::{Deserialize, Serialize};

/// Highest star rating a listing item can carry.
pub const MAX_RATING: u8 = 5;

/// One normalized catalogue record, produced once per harvested listing item
/// and never mutated afterwards.
///
/// Invariants upheld by the extraction layer:
/// - `price` is finite and non-negative (currency symbols and thousands
///   separators are stripped before parsing),
/// - `rating` is in `0..=5`, where `0` means "no recognized star label",
/// - `availability` is whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueItem {
    /// Title as published by the source, entity-unescaped.
    pub title: String,
    /// Price with currency formatting removed.
    pub price: f64,
    /// Free-text stock status, e.g. `"In stock"`.
    pub availability: String,
    /// Star rating in `0..=5`.
    pub rating: u8,
}
