//! HTTP client and harvest loop for the catalogue source.

use std::time::Duration;

use bookdash_core::CatalogueItem;
use reqwest::Client;

use crate::error::ScraperError;
use crate::extract::extract_listing_items;

/// Substitution point in the page URL template.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// HTTP client for numbered catalogue listing pages.
///
/// Pages are fetched strictly one at a time, in ascending order, with no
/// retries. A page that fails to load is a recoverable condition handled
/// inside [`CatalogueClient::harvest`]; it never aborts a run.
pub struct CatalogueClient {
    client: Client,
    page_url_template: String,
    /// Delay between page requests, applied after every page except the
    /// first. Zero disables the delay.
    inter_request_delay_ms: u64,
}

/// The materialized result of one harvest run.
///
/// `items` holds every successfully extracted record in page-ascending, then
/// document order. The counters surface how much of the configured page range
/// actually contributed.
#[derive(Debug)]
pub struct HarvestReport {
    pub items: Vec<CatalogueItem>,
    pub pages_fetched: u32,
    pub pages_skipped: u32,
    /// Listing items dropped because of a structural mismatch.
    pub items_skipped: u32,
}

impl CatalogueClient {
    /// Creates a client with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPageTemplate`] if `page_url_template`
    /// has no `{page}` substitution point, or [`ScraperError::Http`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        page_url_template: &str,
        timeout_secs: u64,
        user_agent: &str,
        inter_request_delay_ms: u64,
    ) -> Result<Self, ScraperError> {
        if !page_url_template.contains(PAGE_PLACEHOLDER) {
            return Err(ScraperError::InvalidPageTemplate {
                template: page_url_template.to_owned(),
                reason: format!("missing the {PAGE_PLACEHOLDER} substitution point"),
            });
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            page_url_template: page_url_template.to_owned(),
            inter_request_delay_ms,
        })
    }

    fn page_url(&self, page: u32) -> String {
        self.page_url_template
            .replace(PAGE_PLACEHOLDER, &page.to_string())
    }

    /// Fetches one listing page and returns its body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — transport failure or body read failure.
    pub async fn fetch_page(&self, page: u32) -> Result<String, ScraperError> {
        let url = self.page_url(page);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                page,
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.text().await?)
    }

    /// Harvests pages `1..=page_count` into one ordered collection.
    ///
    /// A page that fails to load is logged and skipped — the run continues
    /// and the result set shrinks. A listing item with a structural mismatch
    /// is likewise logged and skipped; the rest of its page still
    /// contributes. The full collection is materialized before returning;
    /// there is no partial-result streaming.
    ///
    /// Holds no state between calls: re-running against identical responses
    /// yields an identical report.
    pub async fn harvest(&self, page_count: u32) -> HarvestReport {
        let mut report = HarvestReport {
            items: Vec::new(),
            pages_fetched: 0,
            pages_skipped: 0,
            items_skipped: 0,
        };

        for page in 1..=page_count {
            if page > 1 && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }

            let body = match self.fetch_page(page).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(page, error = %e, "failed to load catalogue page — skipping");
                    report.pages_skipped += 1;
                    continue;
                }
            };
            report.pages_fetched += 1;

            for result in extract_listing_items(&body, page) {
                match result {
                    Ok(item) => report.items.push(item),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed listing item");
                        report.items_skipped += 1;
                    }
                }
            }
        }

        report
    }
}
