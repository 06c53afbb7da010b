//! CSS selectors for the catalogue listing markup.
//!
//! The source site's structure is fixed; all selectors live here so a markup
//! change is a one-file update.

use std::sync::LazyLock;

use scraper::Selector;

/// Listing-item container: one product block per record.
pub static PRODUCT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.product_pod").unwrap());

/// Title link; the full title is in its `title` attribute (the link text is
/// truncated by the site).
pub static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3 a").unwrap());

/// Currency-formatted price text.
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.price_color").unwrap());

/// Stock status text, heavily padded with whitespace in the source markup.
pub static AVAILABILITY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.instock.availability").unwrap());

/// Star-rating element; the star count is the word-valued second class,
/// e.g. `class="star-rating Three"`.
pub static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.star-rating").unwrap());
