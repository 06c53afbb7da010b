use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} for page {page} ({url})")]
    UnexpectedStatus { page: u32, status: u16, url: String },

    #[error("listing item {item} on page {page} is missing its {missing}")]
    ItemStructure {
        page: u32,
        /// Zero-based document-order index of the item within its page.
        item: usize,
        missing: &'static str,
    },

    #[error("invalid page URL template \"{template}\": {reason}")]
    InvalidPageTemplate { template: String, reason: String },
}
