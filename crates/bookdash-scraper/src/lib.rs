pub mod client;
pub mod error;
pub mod extract;
pub mod parse;
mod selectors;

pub use client::{CatalogueClient, HarvestReport};
pub use error::ScraperError;
pub use extract::extract_listing_items;
